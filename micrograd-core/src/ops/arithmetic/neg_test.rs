use super::neg_op;
use crate::ops::Op;
use crate::value::Value;

#[test]
fn test_neg_is_mul_by_minus_one() {
    let a = Value::new(2.5);
    let n = neg_op(&a);
    assert_eq!(n.value(), -2.5);
    assert_eq!(n.op(), Op::Mul);
    assert_eq!(n.operands()[1].value(), -1.0);

    n.backward().unwrap();
    assert_eq!(a.grad(), -1.0);
}
