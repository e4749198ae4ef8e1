use dualgrad::Var;

fn main() {
    for i in -10..=10 {
        let x = i as f64 / 10. * std::f64::consts::PI;
        run_model(x);
    }
}

fn run_model(x_val: f64) {
    let x = Var::input(x_val);
    let y = x * x.sin();

    println!("[{x_val}, {}, {}],", y.value(), y.tangent());
}
