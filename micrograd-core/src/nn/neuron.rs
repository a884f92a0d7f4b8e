use crate::error::MicrogradError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// A single unit: `act(b + Σ wᵢ·xᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `d_in` weights and one bias, all drawn from `init`.
    /// Parameters are labelled `w0..w{d_in-1}` and `b`.
    pub fn new<R: Rng + ?Sized>(
        d_in: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        let mut draws = init.sample_n(d_in + 1, rng)?;
        let bias = Value::new(draws.pop().unwrap_or_default());
        let neuron = Neuron {
            weights: Value::make(&draws),
            bias,
            activation,
        };
        neuron.label_parameters();
        Ok(neuron)
    }

    /// Builds a neuron around existing parameter leaves.
    pub fn from_parameters(weights: Vec<Value>, bias: Value, activation: Activation) -> Self {
        Neuron { weights, bias, activation }
    }

    pub fn weights(&self) -> &[Value] {
        &self.weights
    }

    pub fn bias(&self) -> &Value {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn d_in(&self) -> usize {
        self.weights.len()
    }

    /// Output node for one input vector.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, MicrogradError> {
        if inputs.len() != self.weights.len() {
            return Err(MicrogradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
                operation: "Neuron forward".to_string(),
            });
        }
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.clone(), |acc, (w, x)| acc + w * x);
        Ok(self.activation.apply(pre_activation))
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        let mut named: Vec<(String, Value)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(k, w)| (format!("w{}", k), w.clone()))
            .collect();
        named.push(("b".to_string(), self.bias.clone()));
        named
    }
}
