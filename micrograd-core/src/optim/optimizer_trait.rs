use crate::error::MicrogradError;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers own handles to the parameters they update and read the gradients that the
/// last backward pass accumulated into them.
pub trait Optimizer {
    /// Performs a single optimization step.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the step was successful, or a `MicrogradError` otherwise.
    fn step(&mut self) -> Result<(), MicrogradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Backward passes accumulate, so this is called before each new backward pass.
    fn zero_grad(&mut self);
}
