//! Optimizers for training networks built from [`Value`](crate::Value) parameters.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
