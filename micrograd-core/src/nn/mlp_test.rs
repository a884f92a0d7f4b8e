use super::*;
use crate::autograd::grad_dict;
use crate::nn::{Activation, Init};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn default_mlp(seed: u64) -> Mlp {
    Mlp::new(&MlpConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_mlp_structure() {
    let mlp = default_mlp(0);
    assert_eq!(mlp.layers().len(), 6);
    assert_eq!(mlp.d_in(), 3);
    assert_eq!(mlp.d_out(), 1);
    // 2·(3+1) + 4·2·(2+1) + 1·(2+1)
    assert_eq!(mlp.num_parameters(), 8 + 24 + 3);
}

#[test]
fn test_mlp_parameter_labels_are_unique() {
    let mlp = default_mlp(0);
    let labels: Vec<String> = mlp.parameters().iter().filter_map(Value::label).collect();
    assert_eq!(labels.len(), mlp.num_parameters());
    assert_eq!(labels[0], "layer0.neuron0.w0");
    assert_eq!(labels.last().map(String::as_str), Some("layer5.neuron0.b"));
    let unique: std::collections::HashSet<&String> = labels.iter().collect();
    assert_eq!(unique.len(), labels.len());
}

#[test]
fn test_mlp_same_seed_same_parameters() {
    let a: Vec<f64> = default_mlp(9).parameters().iter().map(Value::value).collect();
    let b: Vec<f64> = default_mlp(9).parameters().iter().map(Value::value).collect();
    let c: Vec<f64> = default_mlp(10).parameters().iter().map(Value::value).collect();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_mlp_forward_and_backward_reach_every_parameter() -> Result<(), MicrogradError> {
    let config = MlpConfig::new(2, 3, 1, 1).with_init(Init::Uniform { low: 0.1, high: 0.5 });
    let mlp = Mlp::new(&config, &mut StdRng::seed_from_u64(5))?;
    let out = mlp.forward(&Value::make(&[1.0, -1.0]))?;
    assert_eq!(out.len(), 1);
    assert!(out[0].value().abs() < 1.0);

    out[0].backward()?;
    let grads = grad_dict(&out[0])?;
    for (name, p) in mlp.named_parameters() {
        assert_eq!(grads.get(&name).copied(), Some(p.grad()));
    }
    assert!(mlp.parameters().iter().all(|p| p.grad() != 0.0));

    mlp.zero_grad();
    assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    Ok(())
}

#[test]
fn test_mlp_identity_network_matches_manual_computation() -> Result<(), MicrogradError> {
    let config = MlpConfig::new(1, 1, 0, 1)
        .with_activation(Activation::Identity)
        .with_init(Init::Normal { mean: 0.5, std: 0.0 });
    let mlp = Mlp::new(&config, &mut StdRng::seed_from_u64(0))?;
    // layer0: 0.5·x + 0.5 ; layer1: 0.5·h + 0.5
    let out = mlp.forward(&Value::make(&[2.0]))?;
    assert_relative_eq!(out[0].value(), 0.5 * (0.5 * 2.0 + 0.5) + 0.5);
    Ok(())
}

#[test]
fn test_mlp_batch_forward() -> Result<(), MicrogradError> {
    let mlp = default_mlp(1);
    let batch = vec![Value::make(&[2.0, 3.0, -1.0]), Value::make(&[3.0, -1.0, 0.5])];
    let outs = mlp.batch_forward(&batch)?;
    assert_eq!(outs.len(), 2);
    assert!(outs.iter().all(|o| o.len() == 1));

    let bad = vec![Value::make(&[1.0])];
    assert!(matches!(
        mlp.batch_forward(&bad),
        Err(MicrogradError::ShapeMismatch { expected: 3, actual: 1, .. })
    ));
    Ok(())
}

#[test]
fn test_mlp_rejects_invalid_config() {
    let result = Mlp::new(&MlpConfig::new(3, 0, 1, 1), &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(MicrogradError::InvalidConfiguration { .. })));
}
