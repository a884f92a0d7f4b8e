use crate::config::MlpConfig;
use crate::error::MicrogradError;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;
use rand::Rng;

/// Multilayer perceptron: an input layer `d_in → d_hidden`, `n_hidden` layers
/// `d_hidden → d_hidden`, and an output layer `d_hidden → d_out`, applied in sequence.
///
/// Parameters are labelled `layer{i}.neuron{j}.w{k}` and `layer{i}.neuron{j}.b`, with `i`
/// counting from the input layer.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds a network with the shape of `config`, drawing parameters from `rng`.
    pub fn new<R: Rng + ?Sized>(config: &MlpConfig, rng: &mut R) -> Result<Self, MicrogradError> {
        config.validate()?;
        let mut layers = Vec::with_capacity(config.n_hidden + 2);
        layers.push(Layer::new(config.d_in, config.d_hidden, config.activation, config.init, &mut *rng)?);
        for _ in 0..config.n_hidden {
            layers.push(Layer::new(
                config.d_hidden,
                config.d_hidden,
                config.activation,
                config.init,
                &mut *rng,
            )?);
        }
        layers.push(Layer::new(config.d_hidden, config.d_out, config.activation, config.init, &mut *rng)?);

        let mlp = Mlp { layers };
        mlp.label_parameters();
        log::debug!(
            "Built Mlp {}→{}×{}→{} ({} parameters)",
            config.d_in,
            config.d_hidden,
            config.n_hidden,
            config.d_out,
            mlp.num_parameters()
        );
        Ok(mlp)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn d_in(&self) -> usize {
        self.layers.first().map_or(0, Layer::d_in)
    }

    pub fn d_out(&self) -> usize {
        self.layers.last().map_or(0, Layer::d_out)
    }

    /// Runs the network on every sample of `batch`. Samples share no nodes besides the
    /// parameters.
    pub fn batch_forward(&self, batch: &[Vec<Value>]) -> Result<Vec<Vec<Value>>, MicrogradError> {
        batch.iter().map(|sample| self.forward(sample)).collect()
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, MicrogradError> {
        let mut xs = inputs.to_vec();
        for layer in &self.layers {
            xs = layer.forward(&xs)?;
        }
        Ok(xs)
    }

    fn named_parameters(&self) -> Vec<(String, Value)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, p)| (format!("layer{}.{}", i, name), p))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
