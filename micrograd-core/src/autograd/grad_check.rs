use crate::error::MicrogradError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicrogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicrogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(MicrogradError),
}

impl From<MicrogradError> for GradCheckError {
    fn from(err: MicrogradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central differences.
///
/// `func` builds a graph over one fresh leaf per entry of `inputs` and returns its output.
/// The analytical gradient of each input comes from one backward pass; the numerical one
/// re-runs `func` on fresh leaves with that input moved by `±epsilon`. Each pair must agree
/// within `tolerance`, absolute or relative.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicrogradError>,
{
    // --- 1. Analytical gradients ---
    let leaves = Value::make(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradient per input ---
    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();

        let loss_plus = evaluate_shifted(&func, inputs, i, epsilon)?;
        let loss_minus = evaluate_shifted(&func, inputs, i, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Output of `func` on fresh leaves where input `index` is moved by `shift`.
fn evaluate_shifted<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    shift: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicrogradError>,
{
    let mut shifted = inputs.to_vec();
    shifted[index] += shift;
    let output = func(&Value::make(&shifted)).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_passes_for_correct_rules() {
        check_grad(|xs| Ok((&xs[0] * &xs[1]).exp() + xs[0].tanh()), &[0.3, -0.7], 1e-6, 1e-5)
            .unwrap();
    }

    #[test]
    fn test_check_grad_detects_wrong_gradient() {
        // At the relu kink the rule yields 0 while the central difference straddles it.
        let result = check_grad(|xs| Ok(xs[0].relu()), &[0.0], 1e-6, 1e-5);
        match result {
            Err(GradCheckError::GradientMismatch { input_index, analytical_grad, numerical_grad, .. }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 0.0);
                assert!((numerical_grad - 0.5).abs() < 1e-6);
            }
            other => panic!("Expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_propagates_forward_error() {
        let result = check_grad(
            |_| Err(MicrogradError::UnsupportedOperation("boom".to_string())),
            &[1.0],
            1e-6,
            1e-5,
        );
        assert!(matches!(result, Err(GradCheckError::ForwardPassError(_))));
    }
}
