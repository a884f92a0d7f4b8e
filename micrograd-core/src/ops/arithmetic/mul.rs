use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Multiplies two nodes: `a * b`.
///
/// Backward: `da += b * g`, `db += a * g`.
pub fn mul_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    apply_op(Op::Mul, vec![a.into(), b.into()])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
