//! Finite-difference recompute path.
//!
//! An independent way of estimating gradients: re-derive the root's value with one labelled
//! node nudged by `h` and take `(perturbed - original) / h`. It is **not** a second source of
//! truth next to [`backward`](crate::autograd::backward::backward) and is known to disagree
//! with it:
//!
//! - perturbations are keyed by label, so every node sharing a label moves at once and
//!   unlabelled nodes never get an estimate;
//! - estimates are assigned, not accumulated, and gradients of unlabelled nodes are left as
//!   they were;
//! - a one-sided difference carries `O(h)` truncation error on top of rounding error.
//!
//! Use it for testing and teaching contrast only.

use crate::autograd::graph::{descendants, topological_sort, NodeId};
use crate::error::MicrogradError;
use crate::value::Value;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Step used by [`Value::naive_backward`] when none is given.
pub const DEFAULT_STEP: f64 = 1e-5;

/// Recomputes what `root`'s value would be if the labelled nodes in `perturbations` held the
/// given values.
///
/// Every reachable node is re-derived bottom-up from its recomputed operands using the forward
/// rule of its operation tag. A node whose label is in `perturbations` takes the mapped value
/// instead, whether it is a leaf or not. Stored values are never modified.
///
/// # Errors
/// * `CycleDetected` if the reachable graph is cyclic.
/// * `ArityMismatch` if a node's operand count does not match its operation.
pub fn recompute(
    root: &Value,
    perturbations: Option<&HashMap<String, f64>>,
) -> Result<f64, MicrogradError> {
    let sorted_nodes = topological_sort(root)?;
    let mut recomputed: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());

    for node in &sorted_nodes {
        let data = node.read_data();
        let overridden = match (perturbations, data.label.as_ref()) {
            (Some(map), Some(label)) => map.get(label).copied(),
            _ => None,
        };
        let value = match overridden {
            Some(value) => value,
            None if data.op.is_leaf() => data.value,
            None => {
                let operand_values = data
                    .operands
                    .iter()
                    .map(|operand| recomputed.get(&operand.id()).copied())
                    .collect::<Option<Vec<f64>>>()
                    .ok_or_else(|| {
                        MicrogradError::InternalError(format!(
                            "operand of {} recomputed out of order",
                            node.display_name()
                        ))
                    })?;
                data.op.forward(&operand_values)?
            }
        };
        recomputed.insert(node.id(), value);
    }

    recomputed.get(&root.id()).copied().ok_or_else(|| {
        MicrogradError::InternalError("root missing from its own traversal".to_string())
    })
}

/// Estimates gradients by finite differences instead of the chain rule.
///
/// Sets `root`'s gradient to `1.0`, then for each distinct label among `root`'s descendants
/// (the first node carrying it in traversal order) assigns
/// `(recompute(root, {label: value + h}) - root.value) / h` to that node's gradient.
///
/// See the module docs for why the result can diverge from [`Value::backward`].
///
/// # Errors
/// * `InvalidConfiguration` if `h` is zero or not finite.
/// * Any error from [`recompute`].
pub fn naive_backward(root: &Value, h: f64) -> Result<(), MicrogradError> {
    if h == 0.0 || !h.is_finite() {
        return Err(MicrogradError::InvalidConfiguration {
            field: "h".to_string(),
            reason: format!("step must be finite and non-zero, got {}", h),
        });
    }

    let base = root.value();
    let nodes = descendants(root)?;
    root.set_grad(1.0);

    let mut seen: HashSet<String> = HashSet::new();
    for node in &nodes {
        let Some(label) = node.label() else {
            continue;
        };
        if !seen.insert(label.clone()) {
            continue;
        }
        let mut perturbation = HashMap::new();
        perturbation.insert(label.clone(), node.value() + h);
        let perturbed = recompute(root, Some(&perturbation))?;
        let estimate = (perturbed - base) / h;
        trace!("naive_backward: d{}/d{} ~ {}", root.display_name(), label, estimate);
        node.set_grad(estimate);
    }
    debug!(
        "naive_backward: estimated {} label(s) out of {} descendant(s)",
        seen.len(),
        nodes.len()
    );
    Ok(())
}

impl Value {
    /// See [`recompute`].
    pub fn recompute(&self, perturbations: Option<&HashMap<String, f64>>) -> Result<f64, MicrogradError> {
        recompute(self, perturbations)
    }

    /// [`naive_backward`] with [`DEFAULT_STEP`].
    pub fn naive_backward(&self) -> Result<(), MicrogradError> {
        naive_backward(self, DEFAULT_STEP)
    }
}

#[cfg(test)]
#[path = "naive_test.rs"]
mod tests;
