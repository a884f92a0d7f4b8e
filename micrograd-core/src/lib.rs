//! Scalar reverse-mode automatic differentiation with a small neural-network layer on top.
//!
//! Expressions over [`Value`] build a directed acyclic graph; [`Value::backward`] fills every
//! node's gradient with the derivative of the root with respect to that node.
//!
//! ```
//! use micrograd_core::Value;
//!
//! let a = Value::with_label(2.0, "a");
//! let b = Value::with_label(-3.0, "b");
//! let c = (&a * &b + 10.0).tanh();
//! c.backward().unwrap();
//! assert!(a.grad() != 0.0);
//! ```

pub mod autograd;
pub mod config;
pub mod error;
pub mod nn;
pub mod ops;
pub mod optim;
pub mod train;
pub mod utils;
pub mod value;
pub mod viz;

pub use autograd::{backward, descendants, grad_dict, naive_backward, recompute, topological_sort, NodeId};
pub use config::{MlpConfig, TrainConfig};
pub use error::MicrogradError;
pub use ops::Op;
pub use train::{fit, TrainReport};
pub use value::Value;

// Re-export traits required by public impls (`Zero`/`One` for `Value`).
pub use num_traits;
