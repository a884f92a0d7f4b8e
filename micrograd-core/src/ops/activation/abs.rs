use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Absolute value `|a|`.
///
/// Backward: `da += g` for a positive operand, `da += -g` for a negative one, nothing at
/// zero. Accumulates like every other operation.
pub fn abs_op(a: impl Into<Value>) -> Value {
    apply_op(Op::Abs, vec![a.into()])
}

impl Value {
    pub fn abs(&self) -> Value {
        abs_op(self)
    }
}
