use dualgrad::{directional, gradient, Var};

fn main() {
    // z = x·y + sin(x) at x = 2, y = 3
    let x = Var::input(2.);
    let y = Var::input(3.);
    let z = x * y + x.sin();

    println!("f(x,y) = x*y + sin(x) at x=2, y=3");
    println!("value: {}", z.value());
    // Both inputs carry seed 1 here, so this tangent is the directional
    // derivative along (1, 1), not an isolated partial.
    println!("df along (1,1): {}", z.tangent());

    // Isolated df/dy: hold x constant.
    let x = Var::scalar(2.);
    let y = Var::input(3.);
    let z = x * y + x.sin();
    println!("df/dy: {}", z.tangent());

    // The driver seeds one dimension at a time.
    let f = |v: &[Var]| Ok(v[0] * v[1] + v[0].sin());
    let grad = gradient(f, &[2., 3.]).unwrap();
    println!("gradient: {grad:?}");

    let along = directional(f, &[2., 3.], &[1., 1.]).unwrap();
    println!("directional along (1,1): {along}");
}
