//! # Scalar Operations Module (`ops`)
//!
//! This module is the central hub for the scalar operations supported by the graph.
//!
//! ## Structure:
//!
//! - **[`Op`]:** The closed set of operation tags a [`Value`](crate::Value) can carry. The tag
//!   is fixed when the node is built and is the only thing the backward driver and the
//!   recompute path dispatch on: forward semantics live in [`Op::forward`], local gradient
//!   rules in [`Op::backward_contributions`].
//! - **`_op` Functions:** Each operation has a builder (e.g. `add_op`, `tanh_op`) that computes
//!   the forward value and records the operands. Builders never fail; domain violations
//!   (e.g. `0^-1`) follow IEEE floating-point semantics.
//! - **Operator sugar:** `+`, `-`, `*`, `/` and unary `-` on `Value`, `&Value` and `f64` are
//!   thin wrappers over the builders (see [`arithmetic`]).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`activation`]: abs, sigmoid, tanh, relu, exp.

use crate::error::MicrogradError;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

pub mod activation;
pub mod arithmetic;

pub use activation::{abs_op, exp_op, relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};

/// Operation tag stored on every graph node.
///
/// `Leaf` is carried by parameters and constant inputs, and only by nodes without operands.
/// The exponent of `Pow` is a plain constant: gradients never flow into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Leaf,
    Add,
    Mul,
    Pow(f64),
    Abs,
    Sigmoid,
    Tanh,
    Relu,
    Exp,
}

impl Op {
    /// Short name used for logging and graph rendering.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "add",
            Op::Mul => "mul",
            Op::Pow(_) => "pow",
            Op::Abs => "abs",
            Op::Sigmoid => "sigmoid",
            Op::Tanh => "tanh",
            Op::Relu => "relu",
            Op::Exp => "exp",
        }
    }

    /// Number of graph operands a node with this tag holds.
    pub fn arity(&self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Add | Op::Mul => 2,
            Op::Pow(_) | Op::Abs | Op::Sigmoid | Op::Tanh | Op::Relu | Op::Exp => 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    fn check_arity(&self, actual: usize) -> Result<(), MicrogradError> {
        if actual != self.arity() {
            return Err(MicrogradError::ArityMismatch {
                operation: self.to_string(),
                expected: self.arity(),
                actual,
            });
        }
        Ok(())
    }

    /// Forward value of this operation applied to `operands`.
    ///
    /// A `Leaf` has no forward rule of its own: its value is whatever is stored on the node,
    /// so callers are expected to handle leaves before dispatching here.
    ///
    /// # Errors
    /// * `ArityMismatch` if `operands.len()` does not match [`Op::arity`].
    /// * `UnsupportedOperation` for `Leaf`.
    pub fn forward(&self, operands: &[f64]) -> Result<f64, MicrogradError> {
        if self.is_leaf() {
            return Err(MicrogradError::UnsupportedOperation(
                "a leaf has no forward rule".to_string(),
            ));
        }
        self.check_arity(operands.len())?;
        Ok(self.eval(operands))
    }

    /// Forward value without the arity check. Builders call this with operand lists they
    /// assembled themselves.
    pub(crate) fn eval(&self, operands: &[f64]) -> f64 {
        match self {
            Op::Leaf => f64::NAN,
            Op::Add => operands[0] + operands[1],
            Op::Mul => operands[0] * operands[1],
            Op::Pow(k) => operands[0].powf(*k),
            Op::Abs => operands[0].abs(),
            Op::Sigmoid => sigmoid(operands[0]),
            Op::Tanh => operands[0].tanh(),
            Op::Relu => operands[0].max(0.0),
            Op::Exp => operands[0].exp(),
        }
    }

    /// Gradient contributions to each operand, in operand order.
    ///
    /// `operands` are the operand values, `output` is the node's own forward value and
    /// `grad` its accumulated gradient. The caller adds every contribution into the
    /// matching operand's accumulator; no rule overwrites.
    ///
    /// # Errors
    /// * `ArityMismatch` if `operands.len()` does not match [`Op::arity`].
    pub fn backward_contributions(
        &self,
        operands: &[f64],
        output: f64,
        grad: f64,
    ) -> Result<Vec<f64>, MicrogradError> {
        self.check_arity(operands.len())?;
        let contributions = match self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![grad, grad],
            Op::Mul => vec![operands[1] * grad, operands[0] * grad],
            Op::Pow(k) => vec![k * operands[0].powf(k - 1.0) * grad],
            // |a| is never negative, so the sign is taken from the operand.
            Op::Abs => {
                if operands[0] > 0.0 {
                    vec![grad]
                } else if operands[0] < 0.0 {
                    vec![-grad]
                } else {
                    vec![0.0]
                }
            }
            Op::Sigmoid => vec![output * (1.0 - output) * grad],
            Op::Tanh => vec![(1.0 - output * output) * grad],
            Op::Relu => vec![if output > 0.0 { grad } else { 0.0 }],
            Op::Exp => vec![output * grad],
        };
        Ok(contributions)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Pow(k) => write!(f, "pow({})", k),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Op {
    type Err = MicrogradError;

    /// Parses the names produced by `Display`: `add`, `mul`, `pow(<k>)`, ...
    /// `none` is accepted as an alias of `leaf`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "leaf" | "none" => return Ok(Op::Leaf),
            "add" => return Ok(Op::Add),
            "mul" => return Ok(Op::Mul),
            "abs" => return Ok(Op::Abs),
            "sigmoid" => return Ok(Op::Sigmoid),
            "tanh" => return Ok(Op::Tanh),
            "relu" => return Ok(Op::Relu),
            "exp" => return Ok(Op::Exp),
            _ => {}
        }
        s.strip_prefix("pow(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|k| k.trim().parse::<f64>().ok())
            .map(Op::Pow)
            .ok_or_else(|| MicrogradError::UnknownOperation(s.to_string()))
    }
}

pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Builds a node for `op` over `operands`, computing its forward value eagerly.
///
/// Shared by every builder in this module; the operand list is assembled by the caller and
/// always matches `op.arity()`.
pub(crate) fn apply_op(op: Op, operands: Vec<Value>) -> Value {
    debug_assert_eq!(op.arity(), operands.len());
    let inputs: Vec<f64> = operands.iter().map(Value::value).collect();
    let value = op.eval(&inputs);
    log::trace!("{} -> {}", op, value);
    Value::from_op(value, op, operands)
}
