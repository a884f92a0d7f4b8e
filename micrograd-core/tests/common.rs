use micrograd_core::nn::Mlp;
use micrograd_core::MlpConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Initializes `env_logger` once per test binary; `RUST_LOG=debug` shows the engine's logs.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The classic four-sample toy dataset: three inputs, one ±1 target each.
#[allow(dead_code)]
pub(crate) fn toy_dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![vec![1.0], vec![-1.0], vec![-1.0], vec![1.0]];
    (xs, ys)
}

#[allow(dead_code)]
pub(crate) fn seeded_mlp(config: &MlpConfig, seed: u64) -> Mlp {
    Mlp::new(config, &mut StdRng::seed_from_u64(seed)).expect("Test MLP creation failed")
}
