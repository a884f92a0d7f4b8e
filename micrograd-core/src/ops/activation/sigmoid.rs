use crate::ops::{apply_op, Op};
use crate::value::Value;

/// Logistic function `1 / (1 + e^-a)`.
///
/// Backward: `da += s * (1 - s) * g` where `s` is the output. The rule accumulates like every
/// other operation, so an operand shared with another branch keeps both contributions.
pub fn sigmoid_op(a: impl Into<Value>) -> Value {
    apply_op(Op::Sigmoid, vec![a.into()])
}

impl Value {
    pub fn sigmoid(&self) -> Value {
        sigmoid_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::grad_check::check_grad;
    use approx::assert_relative_eq;

    #[test]
    fn test_sigmoid_forward() {
        assert_eq!(sigmoid_op(0.0).value(), 0.5);
        assert_relative_eq!(sigmoid_op(2.0).value(), 1.0 / (1.0 + (-2.0_f64).exp()));
    }

    #[test]
    fn test_sigmoid_backward() {
        let x = Value::new(0.0);
        x.sigmoid().backward().unwrap();
        assert_relative_eq!(x.grad(), 0.25);
        check_grad(|xs| Ok(xs[0].sigmoid()), &[-1.3], 1e-6, 1e-5).unwrap();
    }

    #[test]
    fn test_sigmoid_accumulates_under_fan_in() {
        // x feeds both the sigmoid and a plain product
        let x = Value::new(0.0);
        let out = x.sigmoid() + &x * 3.0;
        out.backward().unwrap();
        assert_relative_eq!(x.grad(), 0.25 + 3.0);
    }
}
