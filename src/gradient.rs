//! Drivers that extract derivatives by replaying a function with seeded
//! inputs. One forward pass yields the derivative along one seed direction,
//! so a full gradient costs n passes. That makes this strategy a good fit
//! when the input count is small next to the cost of the function itself;
//! it is deliberately not optimized for large n.

use crate::error::EvalError;
use crate::var::Var;

/// Compute the gradient of `f` at `point` with one forward evaluation per
/// dimension.
///
/// Pass i seeds `point[i]` as [`Var::input`] and every other dimension as
/// [`Var::scalar`], evaluates `f` and records the result's tangent, which by
/// dual-number arithmetic equals ∂f/∂xᵢ exactly. There is no finite-difference
/// error.
///
/// `f` must be pure and deterministic, and must route every constant it
/// introduces through [`Var::scalar`]; an untracked raw `f64` mixed into the
/// computation breaks tangent propagation silently.
///
/// The passes share no state. An error in any one of them fails the whole
/// call, since there is no partial derivative to report for that dimension.
///
/// ```
/// use dualgrad::{gradient, Var};
///
/// let grad = gradient(|v| Ok(v[0] * v[1]), &[2., 3.]).unwrap();
/// assert_eq!(grad, vec![3., 2.]);
/// ```
pub fn gradient<F>(f: F, point: &[f64]) -> Result<Vec<f64>, EvalError>
where
    F: Fn(&[Var]) -> Result<Var, EvalError>,
{
    let mut grad = Vec::with_capacity(point.len());
    for i in 0..point.len() {
        let vars: Vec<_> = point
            .iter()
            .enumerate()
            .map(|(j, &v)| if i == j { Var::input(v) } else { Var::scalar(v) })
            .collect();
        let result = f(&vars)?;
        grad.push(result.tangent());
    }
    Ok(grad)
}

/// Compute the directional derivative of `f` at `point` along `direction`
/// in a single forward pass.
///
/// Every input is seeded at once with its component of `direction`, so the
/// result's tangent is ∇f · direction. [`gradient`] is the special case of
/// unit directions taken one at a time.
///
/// # Panics
///
/// Panics if `point` and `direction` differ in length.
pub fn directional<F>(f: F, point: &[f64], direction: &[f64]) -> Result<f64, EvalError>
where
    F: Fn(&[Var]) -> Result<Var, EvalError>,
{
    assert_eq!(
        point.len(),
        direction.len(),
        "direction must have one component per input"
    );
    let vars: Vec<_> = point
        .iter()
        .zip(direction.iter())
        .map(|(&v, &d)| Var::new(v, d))
        .collect();
    Ok(f(&vars)?.tangent())
}

#[test]
fn test_gradient_product() {
    let grad = gradient(|v| Ok(v[0] * v[1]), &[2., 3.]).unwrap();
    assert_eq!(grad, vec![3., 2.]);
}

#[test]
fn test_gradient_mixed_sine() {
    // f(x, y) = x·y + sin(x)
    let f = |v: &[Var]| Ok(v[0] * v[1] + v[0].sin());
    let grad = gradient(f, &[2., 3.]).unwrap();
    assert_eq!(grad[0], 3. + 2.0_f64.cos());
    assert_eq!(grad[1], 2.);
}

#[test]
fn test_gradient_empty_point() {
    let grad = gradient(|_| Ok(Var::scalar(1.)), &[]).unwrap();
    assert!(grad.is_empty());
}

#[test]
fn test_gradient_propagates_failure() {
    // f(x, y) = x / y fails on the pass where y is exactly zero at the
    // evaluation point.
    let f = |v: &[Var]| v[0].try_div(v[1]);
    assert_eq!(gradient(f, &[1., 0.]), Err(EvalError::DivisionByZero));
}

#[test]
fn test_directional() {
    // f(x, y) = x·y + sin(x) along (1, 1) at (2, 3): ∇f·(1,1) = 5 + cos(2)
    let f = |v: &[Var]| Ok(v[0] * v[1] + v[0].sin());
    let d = directional(f, &[2., 3.], &[1., 1.]).unwrap();
    assert_eq!(d, 5. + 2.0_f64.cos());

    // A zero direction kills the tangent.
    let d = directional(f, &[2., 3.], &[0., 0.]).unwrap();
    assert_eq!(d, 0.);
}
