use crate::autograd::graph::topological_sort;
use crate::error::MicrogradError;
use crate::value::Value;
use log::{debug, trace};

/// Runs reverse-mode differentiation from `root`.
///
/// Sets `root`'s gradient to `1.0`, orders the reachable graph topologically and applies each
/// node's backward rule in reverse order, so a node's accumulator already holds the sum of all
/// downstream contributions by the time its own rule runs. Afterwards every reachable node's
/// gradient is the total derivative of `root` with respect to it.
///
/// Gradients are accumulated, never reset: calling this twice without
/// [`Value::zero_grad`] in between doubles every non-root gradient.
///
/// # Errors
/// * `CycleDetected` if the reachable graph is cyclic; no gradient is touched in that case.
/// * `ArityMismatch` if a node's operand count does not match its operation.
pub fn backward(root: &Value) -> Result<(), MicrogradError> {
    let sorted_nodes = topological_sort(root)?;
    debug!(
        "backward: {} node(s) reachable from {}",
        sorted_nodes.len(),
        root.display_name()
    );

    root.set_grad(1.0);
    for node in sorted_nodes.iter().rev() {
        propagate(node)?;
    }
    Ok(())
}

/// Adds `node`'s local gradient contributions into its operands.
fn propagate(node: &Value) -> Result<(), MicrogradError> {
    // Copy out before touching operands: an operand may be borrowed mutably below.
    let (op, output, grad, operands) = {
        let data = node.read_data();
        (data.op, data.value, data.grad, data.operands.clone())
    };
    let operand_values: Vec<f64> = operands.iter().map(Value::value).collect();
    let contributions = op.backward_contributions(&operand_values, output, grad)?;

    for (operand, delta) in operands.iter().zip(contributions) {
        trace!("{} -> {}: {:+}", op, operand.display_name(), delta);
        operand.acc_grad(delta);
    }
    Ok(())
}

impl Value {
    /// Backpropagates from this node. See [`backward`].
    pub fn backward(&self) -> Result<(), MicrogradError> {
        backward(self)
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
