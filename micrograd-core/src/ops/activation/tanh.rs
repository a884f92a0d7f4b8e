use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Hyperbolic tangent. Backward: `da += (1 - tanh(a)^2) * g`.
pub fn tanh_op(a: impl Into<Value>) -> Value {
    apply_op(Op::Tanh, vec![a.into()])
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}
