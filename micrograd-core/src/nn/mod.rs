//! Neural network building blocks on top of scalar [`Value`](crate::Value) graphs.

pub mod activation;
pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use activation::Activation;
pub use init::Init;
pub use layer::Layer;
pub use losses::{MSELoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
