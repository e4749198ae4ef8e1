use approx::assert_relative_eq;
use dualgrad::{gradient, EvalError, Var};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn mixed_sine_both_inputs_seeded() {
    // z = x·y + sin(x) with both x and y seeded as inputs: the tangent is
    // the directional derivative along (1, 1).
    let x = Var::input(2.);
    let y = Var::input(3.);
    let z = x * y + x.sin();
    assert_relative_eq!(z.value(), 6.909297, epsilon = 1e-6);
    assert_relative_eq!(z.tangent(), 4.583853, epsilon = 1e-6);
}

#[test]
fn mixed_sine_isolated_partial() {
    // Same expression with x held constant: the tangent is exactly ∂z/∂y = x.
    let x = Var::scalar(2.);
    let y = Var::input(3.);
    let z = x * y + x.sin();
    assert_relative_eq!(z.value(), 6.909297, epsilon = 1e-6);
    assert_eq!(z.tangent(), 2.);
}

#[test]
fn gradient_of_product() {
    let grad = gradient(|v| Ok(v[0] * v[1]), &[2., 3.]).unwrap();
    assert_eq!(grad, vec![3., 2.]);
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(
        Var::new(1., 1.).try_div(Var::scalar(0.)),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn domain_failures() {
    assert_eq!(
        Var::scalar(-1.).ln(),
        Err(EvalError::LogNonPositive { value: -1. })
    );
    assert_eq!(
        Var::scalar(0.).powf(-1.),
        Err(EvalError::PowSingular {
            base: 0.,
            exponent: -1.
        })
    );
}

#[test]
fn gradient_with_transcendentals() {
    // f(x, y) = exp(x)·ln(y) + y³
    let f = |v: &[Var]| {
        let cube = v[1].powf(3.)?;
        Ok(v[0].exp() * v[1].ln()? + cube)
    };
    let (x, y) = (0.5, 2.0);
    let grad = gradient(f, &[x, y]).unwrap();
    assert_relative_eq!(grad[0], x.exp() * y.ln(), epsilon = 1e-12);
    assert_relative_eq!(grad[1], x.exp() / y + 3. * y * y, epsilon = 1e-12);
}

#[test]
fn gradient_matches_finite_differences() {
    // f(x, y, z) = sin(x)·cos(y) + exp(z)·x, checked against central
    // differences at seeded random points. The forward-mode tangents are
    // exact; the tolerance only covers the finite-difference truncation.
    let f = |v: &[Var]| Ok(v[0].sin() * v[1].cos() + v[2].exp() * v[0]);
    let fval = |p: &[f64]| p[0].sin() * p[1].cos() + p[2].exp() * p[0];

    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..20 {
        let point: Vec<f64> = (0..3).map(|_| rng.gen_range(-2.0..2.0)).collect();
        let grad = gradient(f, &point).unwrap();
        let h = 1e-6;
        for i in 0..3 {
            let mut hi = point.clone();
            let mut lo = point.clone();
            hi[i] += h;
            lo[i] -= h;
            let numeric = (fval(&hi) - fval(&lo)) / (2. * h);
            assert_relative_eq!(grad[i], numeric, epsilon = 1e-4, max_relative = 1e-4);
        }
    }
}

#[test]
fn driver_rebuilds_fresh_inputs_per_pass() {
    // f divides by (x − 1); the gradient at x = 1 fails on every pass, while
    // at x = 2 every pass succeeds. Nothing leaks between the two calls.
    let f = |v: &[Var]| {
        let denom = v[0] - Var::scalar(1.);
        v[1].try_div(denom)
    };
    assert_eq!(gradient(f, &[1., 5.]), Err(EvalError::DivisionByZero));
    let grad = gradient(f, &[2., 5.]).unwrap();
    assert_relative_eq!(grad[0], -5., epsilon = 1e-12); // -y/(x-1)²
    assert_relative_eq!(grad[1], 1., epsilon = 1e-12); // 1/(x-1)
}
