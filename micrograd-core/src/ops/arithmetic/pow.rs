use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Raises a node to a constant power: `base^exponent`.
///
/// The exponent is stored in the operation tag, not as a graph node, so no gradient is
/// propagated into it. Backward: `dbase += k * base^(k-1) * g`.
///
/// No domain check is done: a zero or negative base with a negative or fractional exponent
/// yields `inf`/`NaN` exactly as `f64::powf` does, and so does its gradient.
pub fn pow_op(base: impl Into<Value>, exponent: f64) -> Value {
    apply_op(Op::Pow(exponent), vec![base.into()])
}

impl Value {
    /// `self^exponent` with gradient tracking. See [`pow_op`].
    pub fn pow(&self, exponent: f64) -> Value {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
