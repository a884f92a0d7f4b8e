use crate::value::Value;

/// Asserts that the forward values of `actual` match `expected` within `tolerance`.
/// Panics with the offending index otherwise.
pub fn check_values_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    let values: Vec<f64> = actual.iter().map(Value::value).collect();
    check_near(&values, expected, tolerance, "value");
}

/// Asserts that the gradients of `actual` match `expected` within `tolerance`.
pub fn check_grads_near(actual: &[Value], expected: &[f64], tolerance: f64) {
    let grads: Vec<f64> = actual.iter().map(Value::grad).collect();
    check_near(&grads, expected, tolerance, "grad");
}

fn check_near(actual: &[f64], expected: &[f64], tolerance: f64, what: &str) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}
