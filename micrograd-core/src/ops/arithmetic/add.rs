use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Adds two nodes: `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: impl Into<Value>, b: impl Into<Value>) -> Value {
    apply_op(Op::Add, vec![a.into(), b.into()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
