//! Arithmetic builders and the operator sugar over them.
//!
//! `add`, `mul` and `pow` are primitive graph operations. `neg`, `sub` and `div` are derived:
//! they build the same primitive nodes a user would write by hand
//! (`-a == a * -1`, `a - b == a + (-b)`, `a / b == a * b^-1`).

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

use crate::value::Value;
use num_traits::{One, Zero};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Implements a binary `std::ops` trait for every owned/borrowed combination of `Value`,
/// plus `f64` on either side (auto-promoted to a constant leaf).
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $builder:ident) => {
        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $builder(&self, &rhs)
            }
        }

        impl<'a> $trait<&'a Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $builder(&self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $builder(self, &rhs)
            }
        }

        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $builder(self, rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $builder(&self, rhs)
            }
        }

        impl<'a> $trait<f64> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                $builder(self, rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $builder(self, &rhs)
            }
        }

        impl<'a> $trait<&'a Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &'a Value) -> Value {
                $builder(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(&self)
    }
}

impl<'a> Neg for &'a Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Value::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Value {
    fn one() -> Self {
        Value::new(1.0)
    }
}

impl Sum for Value {
    /// Chains `add` nodes starting from a constant zero leaf.
    fn sum<I: Iterator<Item = Value>>(iter: I) -> Value {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, &v))
    }
}

impl<'a> Sum<&'a Value> for Value {
    fn sum<I: Iterator<Item = &'a Value>>(iter: I) -> Value {
        iter.fold(Value::zero(), |acc, v| add_op(&acc, v))
    }
}
