use crate::ops::{apply_op, Op};
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
///
/// Backward: the operand receives `g` if the output is positive, nothing otherwise
/// (including at exactly zero).
pub fn relu_op(a: impl Into<Value>) -> Value {
    apply_op(Op::Relu, vec![a.into()])
}

impl Value {
    /// `max(0, self)` with gradient tracking.
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

// --- Tests ---

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
