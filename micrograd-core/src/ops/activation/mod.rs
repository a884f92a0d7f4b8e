//! # Activation Functions
//!
//! Unary non-linearities over a single graph node. Each builder records its operand and
//! lets [`Op::backward_contributions`](crate::ops::Op::backward_contributions) supply the
//! local derivative.
//!
//! ## Currently Implemented:
//! - [`abs_op`]: absolute value.
//! - [`sigmoid_op`]: logistic function.
//! - [`tanh_op`]: hyperbolic tangent.
//! - [`relu_op`]: Rectified Linear Unit.
//! - [`exp_op`]: natural exponential.
//!
//! All of them accumulate into their operand's gradient during backward, including `abs`
//! and `sigmoid`.

pub mod abs;
pub mod exp;
pub mod relu;
pub mod sigmoid;
pub mod tanh;

// Re-export key functions
pub use abs::abs_op;
pub use exp::exp_op;
pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
