//! Gradient descent on the Rosenbrock function, driven by forward-mode
//! gradients. The starting point comes from an explicitly seeded RNG passed
//! in by the caller, so runs are reproducible.

use dualgrad::{gradient, Var};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RATE: f64 = 1e-3;
const ITERS: usize = 20000;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let start: Vec<f64> = (0..2).map(|_| rng.gen_range(-1.5..1.5)).collect();
    println!("start: {start:?}");

    // f(x, y) = (1 − x)² + 100(y − x²)²
    let rosenbrock = |v: &[Var]| {
        let one = Var::scalar(1.);
        let hundred = Var::scalar(100.);
        let a = one - v[0];
        let b = v[1] - v[0] * v[0];
        Ok(a * a + hundred * b * b)
    };

    let mut point = start;
    for iter in 0..ITERS {
        let grad = gradient(rosenbrock, &point).unwrap();
        for (p, g) in point.iter_mut().zip(grad.iter()) {
            *p -= RATE * g;
        }
        if iter % 2000 == 0 {
            println!("iter {iter}: {point:?}");
        }
    }
    println!("minimum near: {point:?} (expect [1, 1])");
}
