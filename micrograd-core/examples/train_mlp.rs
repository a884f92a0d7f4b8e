//! # Training a small MLP on the four-sample toy problem
//!
//! Builds a 3 → 2 (×4 hidden layers) → 1 tanh network, then runs plain SGD on the summed
//! squared error for the default number of epochs, printing the loss and the rounded
//! residuals `y − pred` every few epochs.
//!
//! ## Execution
//! `cargo run --example train_mlp`
//!
//! Set `RUST_LOG=debug` to also see the engine's logs.

use micrograd_core::nn::{MSELoss, Mlp, Module, Reduction};
use micrograd_core::optim::{Optimizer, SgdOptimizer};
use micrograd_core::{MicrogradError, MlpConfig, TrainConfig, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MicrogradError> {
    env_logger::init();

    let xs = vec![
        Value::make(&[2.0, 3.0, -1.0]),
        Value::make(&[3.0, -1.0, 0.5]),
        Value::make(&[0.5, 1.0, 1.0]),
        Value::make(&[1.0, 1.0, -1.0]),
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let train = TrainConfig::default();
    train.validate()?;
    let mut rng = StdRng::seed_from_u64(train.seed);
    let net = Mlp::new(&MlpConfig::default(), &mut rng)?;
    println!("Model with {} parameters", net.num_parameters());

    let criterion = MSELoss::new(Reduction::Sum);
    let mut optimizer = SgdOptimizer::new(net.parameters(), train.learning_rate, train.momentum, train.weight_decay);

    for epoch in 0..train.epochs {
        let preds: Vec<Value> = net.batch_forward(&xs)?.into_iter().flatten().collect();
        let loss = criterion.calculate(&preds, &ys)?;
        let diffs: Vec<f64> = ys
            .iter()
            .zip(&preds)
            .map(|(y, pred)| ((y - pred.value()) * 1000.0).round() / 1000.0)
            .collect();

        optimizer.zero_grad();
        loss.backward()?;
        optimizer.step()?;

        if train.log_every != 0 && epoch % train.log_every == 0 {
            println!("epoch {}: loss={:.3}\ndiffs={:?}", epoch, loss.value(), diffs);
        }
    }

    Ok(())
}
