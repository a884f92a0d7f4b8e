use crate::error::MicrogradError;
use crate::nn::activation::Activation;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::value::Value;
use rand::Rng;

/// `d_out` neurons that all read the same `d_in` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    d_in: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        d_in: usize,
        d_out: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, MicrogradError> {
        let neurons = (0..d_out)
            .map(|_| Neuron::new(d_in, activation, init, &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        let layer = Layer { neurons, d_in };
        layer.label_parameters();
        Ok(layer)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn d_in(&self) -> usize {
        self.d_in
    }

    pub fn d_out(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError> {
        if inputs.len() != self.d_in {
            return Err(MicrogradError::ShapeMismatch {
                expected: self.d_in,
                actual: inputs.len(),
                operation: "Layer forward".to_string(),
            });
        }
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(j, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("neuron{}.{}", j, name), p))
            })
            .collect()
    }
}
