use crate::error::MicrogradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
    Identity,
}

impl Activation {
    /// Applies the activation, adding at most one node to the graph.
    pub fn apply(&self, x: Value) -> Value {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.relu(),
            Activation::Sigmoid => x.sigmoid(),
            Activation::Identity => x,
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "tanh",
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
            Activation::Identity => "identity",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Activation {
    type Err = MicrogradError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanh" => Ok(Activation::Tanh),
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            "identity" | "linear" => Ok(Activation::Identity),
            _ => Err(MicrogradError::UnsupportedOperation(format!(
                "Unsupported activation: {}",
                s
            ))),
        }
    }
}
