use crate::error::MicrogradError;
use crate::value::Value;

/// The base trait for network building blocks (neurons, layers, whole networks).
///
/// A module maps a slice of input values to a vector of output values, building fresh graph
/// nodes on every call, and owns a fixed set of parameter leaves.
pub trait Module: std::fmt::Debug {
    /// Runs the module on `inputs`.
    ///
    /// # Errors
    /// `ShapeMismatch` if `inputs` does not have the length the module expects.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError>;

    /// Handles to every learnable parameter, including those of sub-modules.
    fn parameters(&self) -> Vec<Value> {
        self.named_parameters().into_iter().map(|(_, p)| p).collect()
    }

    /// Parameters with hierarchical names such as `neuron0.w2` or `layer1.neuron0.b`.
    fn named_parameters(&self) -> Vec<(String, Value)>;

    /// Resets the gradient of every parameter to zero.
    fn zero_grad(&self) {
        for p in self.parameters() {
            p.zero_grad();
        }
    }

    /// Writes each parameter's hierarchical name into its label, so that label-keyed
    /// queries (`grad_dict`, the finite-difference path) can address it.
    fn label_parameters(&self) {
        for (name, p) in self.named_parameters() {
            p.set_label(name);
        }
    }

    /// Number of learnable parameters.
    fn num_parameters(&self) -> usize {
        self.named_parameters().len()
    }
}
