use super::*;
use approx::assert_relative_eq;

fn perturb(label: &str, value: f64) -> HashMap<String, f64> {
    let mut map = HashMap::new();
    map.insert(label.to_string(), value);
    map
}

#[test]
fn test_recompute_without_perturbation_matches_forward() {
    let x = Value::with_label(0.3, "x");
    let y = Value::with_label(-1.7, "y");
    let out = ((&x * &y).exp() + y.abs().pow(2.0) - x.sigmoid()).tanh() / (y.relu() + 2.0);
    assert_relative_eq!(recompute(&out, None).unwrap(), out.value(), epsilon = 1e-12);
    assert_relative_eq!(out.recompute(Some(&HashMap::new())).unwrap(), out.value(), epsilon = 1e-12);
}

#[test]
fn test_recompute_with_leaf_perturbation() {
    let x = Value::with_label(3.0, "x");
    let y = Value::with_label(4.0, "y");
    let z = &x * &y;
    assert_eq!(recompute(&z, Some(&perturb("x", 4.0))).unwrap(), 16.0);
    // stored values untouched
    assert_eq!(x.value(), 3.0);
    assert_eq!(z.value(), 12.0);
}

#[test]
fn test_recompute_overrides_internal_node() {
    let x = Value::new(1.0);
    let mid = x.exp().labeled("mid");
    let out = &mid * 2.0;
    assert_eq!(recompute(&out, Some(&perturb("mid", 10.0))).unwrap(), 20.0);
}

#[test]
fn test_naive_backward_close_on_simple_graph() {
    // Unique labels, one path per leaf: the estimate lands near the analytic gradient.
    let x = Value::with_label(3.0, "x");
    let y = Value::with_label(4.0, "y");
    let z = (&x * &y).labeled("z");
    naive_backward(&z, 1e-6).unwrap();
    assert_eq!(z.grad(), 1.0);
    assert_relative_eq!(x.grad(), 4.0, epsilon = 1e-4);
    assert_relative_eq!(y.grad(), 3.0, epsilon = 1e-4);
}

#[test]
fn test_naive_backward_diverges_on_layered_fan_in_graph() {
    // Two "layers" reuse the label "w" and h1 fans into two branches.
    let x = Value::with_label(0.5, "x");
    let wa = Value::with_label(0.8, "w");
    let wb = Value::with_label(-1.2, "w");
    let h1 = (&x * &wa).tanh();
    let out = (&h1 * &wb).tanh() + &h1 * &x;

    out.backward().unwrap();
    let analytic_x = x.grad();
    let analytic_wa = wa.grad();
    let analytic_h1 = h1.grad();
    for node in descendants(&out).unwrap() {
        node.zero_grad();
    }

    out.naive_backward().unwrap();

    // "w" moves both weights at once, so the estimate assigned to wa is far off.
    assert!(
        (wa.grad() - analytic_wa).abs() > 1.0,
        "expected divergence, naive={} analytic={}",
        wa.grad(),
        analytic_wa
    );
    // Second node with the same label and unlabelled nodes get nothing.
    assert_eq!(wb.grad(), 0.0);
    assert_eq!(h1.grad(), 0.0);
    assert!(analytic_h1 != 0.0);
    // A uniquely labelled leaf still comes out roughly right.
    assert_relative_eq!(x.grad(), analytic_x, epsilon = 1e-3);
}

#[test]
fn test_naive_backward_assigns_instead_of_accumulating() {
    let x = Value::with_label(2.0, "x");
    let out = &x * 5.0;
    x.set_grad(100.0);
    naive_backward(&out, 1e-6).unwrap();
    assert_relative_eq!(x.grad(), 5.0, epsilon = 1e-4);
}

#[test]
fn test_naive_backward_rejects_bad_step() {
    let x = Value::with_label(1.0, "x");
    let out = x.exp();
    for h in [0.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            naive_backward(&out, h),
            Err(MicrogradError::InvalidConfiguration { .. })
        ));
    }
}

#[test]
fn test_recompute_reports_arity_mismatch() {
    let x = Value::new(1.0);
    let extra = Value::new(2.0);
    let e = x.exp();
    e.push_operand_unchecked(&extra);
    assert!(matches!(
        recompute(&e, None),
        Err(MicrogradError::ArityMismatch { .. })
    ));
}
