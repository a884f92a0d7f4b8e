//! Full-batch training loop.

use crate::config::TrainConfig;
use crate::error::MicrogradError;
use crate::nn::{MSELoss, Module, Reduction};
use crate::optim::{Optimizer, SgdOptimizer};
use crate::value::Value;

/// Outcome of [`fit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    /// Loss of every epoch, computed before that epoch's update.
    pub losses: Vec<f64>,
    /// Model outputs per sample after the last update.
    pub final_predictions: Vec<Vec<f64>>,
}

impl TrainReport {
    pub fn initial_loss(&self) -> Option<f64> {
        self.losses.first().copied()
    }

    pub fn final_loss(&self) -> Option<f64> {
        self.losses.last().copied()
    }
}

/// Trains `model` on `(inputs, targets)` with summed squared error and SGD.
///
/// Every epoch runs the whole batch forward, builds the loss over all outputs, resets the
/// parameter gradients, backpropagates and takes one optimizer step.
///
/// `config.seed` is not read here: the model arrives already initialized, so callers that want
/// reproducible runs seed the `Rng` they pass to [`crate::nn::Mlp::new`] with it.
///
/// # Errors
/// `InvalidConfiguration` for a bad `config`, `ShapeMismatch` when the batch sizes differ, a
/// sample does not fit the model or a target's length differs from that sample's output
/// count, and any graph error raised by the backward pass.
pub fn fit<M: Module>(
    model: &M,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainReport, MicrogradError> {
    config.validate()?;
    if inputs.len() != targets.len() {
        return Err(MicrogradError::ShapeMismatch {
            expected: targets.len(),
            actual: inputs.len(),
            operation: "fit".to_string(),
        });
    }

    let xs: Vec<Vec<Value>> = inputs.iter().map(|x| Value::make(x)).collect();
    let ys: Vec<f64> = targets.iter().flatten().copied().collect();
    let criterion = MSELoss::new(Reduction::Sum);
    let mut optimizer = SgdOptimizer::new(
        model.parameters(),
        config.learning_rate,
        config.momentum,
        config.weight_decay,
    );

    log::debug!(
        "Training {} parameters on {} samples for {} epochs",
        model.num_parameters(),
        xs.len(),
        config.epochs
    );

    let mut report = TrainReport::default();
    for epoch in 0..config.epochs {
        let preds = predict(model, &xs, targets)?;
        let loss = criterion.calculate(&preds, &ys)?;
        let loss_value = loss.value();
        if !loss_value.is_finite() {
            log::warn!("Non-finite loss {} at epoch {}", loss_value, epoch);
        }

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;
        report.losses.push(loss_value);

        if config.log_every != 0 && epoch % config.log_every == 0 {
            log::debug!("epoch {}: loss={:.3}", epoch, loss_value);
        }
    }

    for (x, y) in xs.iter().zip(targets) {
        let outputs = forward_sample(model, x, y)?;
        report.final_predictions.push(outputs.iter().map(Value::value).collect());
    }
    Ok(report)
}

/// Model outputs for every sample, concatenated in sample order.
fn predict<M: Module>(
    model: &M,
    xs: &[Vec<Value>],
    targets: &[Vec<f64>],
) -> Result<Vec<Value>, MicrogradError> {
    let mut preds = Vec::new();
    for (x, y) in xs.iter().zip(targets) {
        preds.extend(forward_sample(model, x, y)?);
    }
    Ok(preds)
}

/// Outputs for one sample; their count must match the sample's target.
fn forward_sample<M: Module>(model: &M, x: &[Value], y: &[f64]) -> Result<Vec<Value>, MicrogradError> {
    let outputs = model.forward(x)?;
    if outputs.len() != y.len() {
        return Err(MicrogradError::ShapeMismatch {
            expected: outputs.len(),
            actual: y.len(),
            operation: "fit target".to_string(),
        });
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MlpConfig;
    use crate::nn::Mlp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn toy_problem() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let xs = vec![
            vec![2.0, 3.0, -1.0],
            vec![3.0, -1.0, 0.5],
            vec![0.5, 1.0, 1.0],
            vec![1.0, 1.0, -1.0],
        ];
        let ys = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![1.0]];
        (xs, ys)
    }

    #[test]
    fn test_fit_reduces_loss() -> Result<(), MicrogradError> {
        let (xs, ys) = toy_problem();
        let model = Mlp::new(&MlpConfig::new(3, 4, 1, 1), &mut StdRng::seed_from_u64(1337))?;
        let config = TrainConfig::default().with_learning_rate(0.05).with_epochs(200);

        let report = fit(&model, &xs, &ys, &config)?;
        assert_eq!(report.losses.len(), 200);
        let (first, last) = (report.initial_loss().unwrap(), report.final_loss().unwrap());
        assert!(last < first, "loss did not decrease: {} -> {}", first, last);
        assert!(last < 1.0, "final loss too high: {}", last);
        assert_eq!(report.final_predictions.len(), 4);
        Ok(())
    }

    #[test]
    fn test_fit_zero_epochs() -> Result<(), MicrogradError> {
        let (xs, ys) = toy_problem();
        let model = Mlp::new(&MlpConfig::default(), &mut StdRng::seed_from_u64(0))?;
        let before: Vec<f64> = model.parameters().iter().map(Value::value).collect();
        let report = fit(&model, &xs, &ys, &TrainConfig::default().with_epochs(0))?;
        assert!(report.losses.is_empty());
        assert_eq!(report.final_loss(), None);
        let after: Vec<f64> = model.parameters().iter().map(Value::value).collect();
        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn test_fit_rejects_mismatched_batch() -> Result<(), MicrogradError> {
        let (xs, mut ys) = toy_problem();
        ys.pop();
        let model = Mlp::new(&MlpConfig::default(), &mut StdRng::seed_from_u64(0))?;
        let result = fit(&model, &xs, &ys, &TrainConfig::default().with_epochs(1));
        assert!(matches!(result, Err(MicrogradError::ShapeMismatch { expected: 3, actual: 4, .. })));
        Ok(())
    }

    #[test]
    fn test_fit_rejects_misaligned_targets() -> Result<(), MicrogradError> {
        let model = Mlp::new(&MlpConfig::new(3, 2, 0, 1), &mut StdRng::seed_from_u64(0))?;
        let xs = vec![vec![2.0, 3.0, -1.0], vec![3.0, -1.0, 0.5]];
        // Same total length as the two outputs, but paired with the wrong samples.
        let ys = vec![vec![1.0, -1.0], vec![]];
        let before: Vec<f64> = model.parameters().iter().map(Value::value).collect();

        let result = fit(&model, &xs, &ys, &TrainConfig::default().with_epochs(3));
        assert_eq!(
            result.unwrap_err(),
            MicrogradError::ShapeMismatch {
                expected: 1,
                actual: 2,
                operation: "fit target".to_string()
            }
        );
        let after: Vec<f64> = model.parameters().iter().map(Value::value).collect();
        assert_eq!(before, after);

        let zero_epochs = fit(&model, &xs, &ys, &TrainConfig::default().with_epochs(0));
        assert!(matches!(zero_epochs, Err(MicrogradError::ShapeMismatch { .. })));
        Ok(())
    }

    #[test]
    fn test_fit_rejects_invalid_config() -> Result<(), MicrogradError> {
        let (xs, ys) = toy_problem();
        let model = Mlp::new(&MlpConfig::default(), &mut StdRng::seed_from_u64(0))?;
        let config = TrainConfig::default().with_learning_rate(-1.0);
        assert!(matches!(
            fit(&model, &xs, &ys, &config),
            Err(MicrogradError::InvalidConfiguration { .. })
        ));
        Ok(())
    }
}
