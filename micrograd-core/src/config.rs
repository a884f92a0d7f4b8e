//! Network shape and training hyper-parameters.
//!
//! Both structs start from [`Default`] (the classic four-sample toy problem: 3 inputs, four
//! hidden layers of 2 tanh units, 1 output, plain SGD at `1e-4` for 1000 epochs) and are
//! adjusted through the `with_*` setters. Call `validate` before use; [`crate::nn::Mlp::new`]
//! and [`crate::train::fit`] do so themselves.

use crate::error::MicrogradError;
use crate::nn::{Activation, Init};

pub const DEFAULT_D_IN: usize = 3;
pub const DEFAULT_D_HIDDEN: usize = 2;
pub const DEFAULT_N_HIDDEN: usize = 4;
pub const DEFAULT_D_OUT: usize = 1;
pub const DEFAULT_LEARNING_RATE: f64 = 1e-4;
pub const DEFAULT_EPOCHS: usize = 1000;
pub const DEFAULT_LOG_EVERY: usize = 10;
pub const DEFAULT_SEED: u64 = 42;

fn invalid(field: &str, reason: impl Into<String>) -> MicrogradError {
    MicrogradError::InvalidConfiguration {
        field: field.to_string(),
        reason: reason.into(),
    }
}

/// Shape of a multilayer perceptron.
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    /// Number of input values.
    pub d_in: usize,
    /// Neurons per hidden layer.
    pub d_hidden: usize,
    /// Hidden layers between the input and output layers.
    pub n_hidden: usize,
    /// Number of output values.
    pub d_out: usize,
    /// Activation used by every neuron.
    pub activation: Activation,
    pub init: Init,
}

impl Default for MlpConfig {
    fn default() -> Self {
        Self {
            d_in: DEFAULT_D_IN,
            d_hidden: DEFAULT_D_HIDDEN,
            n_hidden: DEFAULT_N_HIDDEN,
            d_out: DEFAULT_D_OUT,
            activation: Activation::Tanh,
            init: Init::default(),
        }
    }
}

impl MlpConfig {
    pub fn new(d_in: usize, d_hidden: usize, n_hidden: usize, d_out: usize) -> Self {
        Self {
            d_in,
            d_hidden,
            n_hidden,
            d_out,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    #[must_use]
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Ensures every dimension is positive and the init distribution is usable.
    pub fn validate(&self) -> Result<(), MicrogradError> {
        if self.d_in == 0 {
            return Err(invalid("d_in", "must be greater than 0"));
        }
        if self.d_hidden == 0 {
            return Err(invalid("d_hidden", "must be greater than 0"));
        }
        if self.d_out == 0 {
            return Err(invalid("d_out", "must be greater than 0"));
        }
        self.init.validate()
    }
}

/// Hyper-parameters of [`crate::train::fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    /// Seed for the `Rng` the caller passes to [`crate::nn::Mlp::new`]. [`crate::train::fit`]
    /// receives an already-built model and does not read it.
    pub seed: u64,
    /// Log the loss every this many epochs; 0 disables progress logging.
    pub log_every: usize,
    /// SGD momentum factor in `[0, 1)`.
    pub momentum: f64,
    /// L2 penalty added to each gradient.
    pub weight_decay: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            seed: DEFAULT_SEED,
            log_every: DEFAULT_LOG_EVERY,
            momentum: 0.0,
            weight_decay: 0.0,
        }
    }
}

impl TrainConfig {
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    #[must_use]
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    #[must_use]
    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    #[must_use]
    pub fn with_weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    pub fn validate(&self) -> Result<(), MicrogradError> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(invalid(
                "learning_rate",
                format!("must be finite and positive, got {}", self.learning_rate),
            ));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(invalid("momentum", format!("must be in [0, 1), got {}", self.momentum)));
        }
        if !self.weight_decay.is_finite() || self.weight_decay < 0.0 {
            return Err(invalid(
                "weight_decay",
                format!("must be finite and non-negative, got {}", self.weight_decay),
            ));
        }
        Ok(())
    }
}
