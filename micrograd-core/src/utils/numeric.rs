/// Central-difference approximation of `f'(x)`: `(f(x + h) − f(x − h)) / 2h`.
///
/// Plain `f64` functions only; for graphs use [`crate::autograd::grad_check::check_grad`].
pub fn derivative<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
    (f(x + h) - f(x - h)) / (2.0 * h)
}
