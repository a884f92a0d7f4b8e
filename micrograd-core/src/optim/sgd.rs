use crate::autograd::NodeId;
use crate::error::MicrogradError;
use crate::optim::optimizer_trait::Optimizer;
use crate::value::Value;
use std::collections::HashMap;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// For each parameter `p` with gradient `g`:
///
/// ```text
/// d = g + weight_decay · p
/// v = momentum · v + d      (v starts at d on the first step; skipped when momentum = 0)
/// p = p − lr · v
/// ```
///
/// Zero gradients are accepted and simply leave the parameter unchanged when there is no
/// momentum or weight decay.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Value>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    momentum_buffers: HashMap<NodeId, f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: the parameter leaves to optimize.
    /// * `lr`: the learning rate.
    /// * `momentum`: momentum factor (0.0 disables it).
    /// * `weight_decay`: L2 penalty factor (0.0 disables it).
    pub fn new(params: impl IntoIterator<Item = Value>, lr: f64, momentum: f64, weight_decay: f64) -> Self {
        SgdOptimizer {
            params: params.into_iter().collect(),
            lr,
            momentum,
            weight_decay,
            momentum_buffers: HashMap::new(),
        }
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn weight_decay(&self) -> f64 {
        self.weight_decay
    }

    /// Momentum buffer of `param`, if a step with momentum has touched it.
    pub fn momentum_buffer(&self, param: &Value) -> Option<f64> {
        self.momentum_buffers.get(&param.id()).copied()
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), MicrogradError> {
        let momentum = self.momentum;
        for param in &self.params {
            let mut d_p = param.grad();
            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * param.value();
            }

            if momentum != 0.0 {
                let buf = self
                    .momentum_buffers
                    .entry(param.id())
                    .and_modify(|v| *v = momentum * *v + d_p)
                    .or_insert(d_p);
                d_p = *buf;
            }

            let updated = param.value() - self.lr * d_p;
            log::trace!("SGD {}: {} -> {}", param.display_name(), param.value(), updated);
            param.set_value(updated);
        }
        log::debug!("SGD step over {} parameters (lr = {})", self.params.len(), self.lr);
        Ok(())
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
