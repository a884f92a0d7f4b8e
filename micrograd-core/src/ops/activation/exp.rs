use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Natural exponential `e^a`. Backward: `da += e^a * g`.
pub fn exp_op(a: impl Into<Value>) -> Value {
    apply_op(Op::Exp, vec![a.into()])
}

impl Value {
    pub fn exp(&self) -> Value {
        exp_op(self)
    }
}
