use crate::dual::Dual;
use crate::error::EvalError;

/// A tracked value used to build differentiable expressions.
///
/// A `Var` wraps one [`Dual`] and carries the tangent through every
/// operation applied to it. How a `Var` is constructed decides what its
/// tangent means:
///
/// - [`Var::scalar`] seeds tangent 0, a constant held fixed;
/// - [`Var::input`] seeds tangent 1, the dimension being differentiated;
/// - [`Var::new`] takes an explicit seed, for arbitrary directional
///   derivatives.
///
/// Arithmetic goes through the operator impls (`+`, `-`, `*` and the
/// fallible [`Var::try_div`]), which always produce a new `Var` and never
/// write through an operand. The compound-assignment impls (`+=`, `-=`,
/// `*=`, [`Var::try_div_assign`]) are sugar over the same algebra for
/// chained in-place updates; they modify the receiver only.
///
/// ```
/// use dualgrad::Var;
///
/// let x = Var::input(2.);
/// let y = Var::scalar(3.);
/// let z = x * y + x.sin();
/// assert_eq!(z.tangent(), 3. + 2.0_f64.cos()); // ∂z/∂x
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Var {
    dual: Dual,
}

impl Var {
    /// A variable with an explicit (value, tangent) seed.
    pub fn new(value: f64, tangent: f64) -> Self {
        Self {
            dual: Dual::new(value, tangent),
        }
    }

    /// A constant: tangent 0, not differentiated.
    pub fn scalar(value: f64) -> Self {
        Self {
            dual: Dual::constant(value),
        }
    }

    /// The differentiated input: tangent 1.
    pub fn input(value: f64) -> Self {
        Self {
            dual: Dual::new(value, 1.),
        }
    }

    pub fn value(&self) -> f64 {
        self.dual.value
    }

    pub fn tangent(&self) -> f64 {
        self.dual.tangent
    }

    /// Quotient rule; fails with [`EvalError::DivisionByZero`] when the
    /// divisor's value is exactly zero, before anything is computed.
    pub fn try_div(self, rhs: Self) -> Result<Self, EvalError> {
        Ok(Self {
            dual: self.dual.try_div(rhs.dual)?,
        })
    }

    /// In-place counterpart of [`Var::try_div`]. On error the receiver is
    /// left unchanged.
    pub fn try_div_assign(&mut self, rhs: Self) -> Result<(), EvalError> {
        self.dual = self.dual.try_div(rhs.dual)?;
        Ok(())
    }

    /// Sine, (sin a, cos a · a′).
    pub fn sin(self) -> Self {
        Self {
            dual: Dual::new(
                self.dual.value.sin(),
                self.dual.value.cos() * self.dual.tangent,
            ),
        }
    }

    /// Cosine, (cos a, −sin a · a′).
    pub fn cos(self) -> Self {
        Self {
            dual: Dual::new(
                self.dual.value.cos(),
                -self.dual.value.sin() * self.dual.tangent,
            ),
        }
    }

    /// Exponential. The exponential is evaluated once and used for both
    /// components.
    pub fn exp(self) -> Self {
        let ex = self.dual.value.exp();
        Self {
            dual: Dual::new(ex, ex * self.dual.tangent),
        }
    }

    /// Natural logarithm, (ln a, a′/a); fails with
    /// [`EvalError::LogNonPositive`] when the value is not positive.
    pub fn ln(self) -> Result<Self, EvalError> {
        if self.dual.value <= 0. {
            return Err(EvalError::LogNonPositive {
                value: self.dual.value,
            });
        }
        Ok(Self {
            dual: Dual::new(
                self.dual.value.ln(),
                self.dual.tangent / self.dual.value,
            ),
        })
    }

    /// Raise to a constant exponent, (aᵉ, e·aᵉ⁻¹·a′). The exponent is not a
    /// tracked value. Fails with [`EvalError::PowSingular`] at base 0 with a
    /// non-positive exponent, where the value or its derivative is
    /// undefined.
    ///
    /// aᵉ⁻¹ is computed once and shared between the value (multiplied back
    /// by a) and the tangent, so the two components can never disagree.
    pub fn powf(self, exponent: f64) -> Result<Self, EvalError> {
        if self.dual.value == 0. && exponent <= 0. {
            return Err(EvalError::PowSingular {
                base: self.dual.value,
                exponent,
            });
        }
        let pow1 = self.dual.value.powf(exponent - 1.);
        Ok(Self {
            dual: Dual::new(
                pow1 * self.dual.value,
                exponent * pow1 * self.dual.tangent,
            ),
        })
    }
}

impl std::ops::Add for Var {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            dual: self.dual + rhs.dual,
        }
    }
}

impl std::ops::Sub for Var {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            dual: self.dual - rhs.dual,
        }
    }
}

impl std::ops::Mul for Var {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            dual: self.dual * rhs.dual,
        }
    }
}

impl std::ops::Neg for Var {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self { dual: -self.dual }
    }
}

impl std::ops::AddAssign for Var {
    fn add_assign(&mut self, rhs: Self) {
        self.dual = self.dual + rhs.dual;
    }
}

impl std::ops::SubAssign for Var {
    fn sub_assign(&mut self, rhs: Self) {
        self.dual = self.dual - rhs.dual;
    }
}

impl std::ops::MulAssign for Var {
    fn mul_assign(&mut self, rhs: Self) {
        self.dual = self.dual * rhs.dual;
    }
}

#[test]
fn test_seeds() {
    assert_eq!(Var::scalar(2.).tangent(), 0.);
    assert_eq!(Var::input(2.).tangent(), 1.);
    let v = Var::new(2., 0.5);
    assert_eq!(v.value(), 2.);
    assert_eq!(v.tangent(), 0.5);
}

#[test]
fn test_chain_rules() {
    let x = 0.7;
    let v = Var::input(x);
    assert_eq!(v.sin().value(), x.sin());
    assert_eq!(v.sin().tangent(), x.cos());
    assert_eq!(v.cos().value(), x.cos());
    assert_eq!(v.cos().tangent(), -x.sin());
    assert_eq!(v.exp().value(), x.exp());
    assert_eq!(v.exp().tangent(), x.exp());
    assert_eq!(v.ln().unwrap().value(), x.ln());
    assert_eq!(v.ln().unwrap().tangent(), 1. / x);
    // powf builds the value as x^(e−1)·x, which need not be bit-identical
    // to x^e.
    let p = v.powf(3.).unwrap();
    approx::assert_relative_eq!(p.value(), x.powf(3.), epsilon = 1e-12);
    approx::assert_relative_eq!(p.tangent(), 3. * x.powf(2.), epsilon = 1e-12);
}

#[test]
fn test_chain_rule_composes() {
    // d/dx sin(x²) = 2x cos(x²)
    let x = 1.3;
    let v = Var::input(x);
    let s = (v * v).sin();
    assert_eq!(s.value(), (x * x).sin());
    assert_eq!(s.tangent(), 2. * x * (x * x).cos());
}

#[test]
fn test_domain_errors() {
    assert_eq!(
        Var::scalar(-1.).ln(),
        Err(EvalError::LogNonPositive { value: -1. })
    );
    assert_eq!(
        Var::scalar(0.).ln(),
        Err(EvalError::LogNonPositive { value: 0. })
    );
    assert_eq!(
        Var::scalar(0.).powf(-1.),
        Err(EvalError::PowSingular {
            base: 0.,
            exponent: -1.
        })
    );
    assert_eq!(
        Var::scalar(0.).powf(0.),
        Err(EvalError::PowSingular {
            base: 0.,
            exponent: 0.
        })
    );
    // Positive exponent at the origin is fine.
    assert!(Var::scalar(0.).powf(2.).is_ok());
}

#[test]
fn test_pure_ops_leave_operands_alone() {
    let v1 = Var::new(2., 1.);
    let v2 = Var::new(3., 0.5);
    let _ = v1 + v2;
    let _ = v1 * v2;
    let _ = v1.sin();
    let _ = v2.exp();
    assert_eq!(v1, Var::new(2., 1.));
    assert_eq!(v2, Var::new(3., 0.5));
}

#[test]
fn test_in_place_matches_pure() {
    let v2 = Var::new(3., 0.5);
    let mut v = Var::new(2., 1.);
    v *= v2;
    assert_eq!(v, Var::new(2., 1.) * v2);
    assert_eq!(v.value(), 6.);
    assert_eq!(v.tangent(), 1. * 3. + 2. * 0.5);
    assert_eq!(v2, Var::new(3., 0.5));

    let mut v = Var::new(2., 1.);
    v += v2;
    assert_eq!(v, Var::new(2., 1.) + v2);
    let mut v = Var::new(2., 1.);
    v -= v2;
    assert_eq!(v, Var::new(2., 1.) - v2);

    let mut v = Var::new(1., 1.);
    v.try_div_assign(v2).unwrap();
    assert_eq!(v, Var::new(1., 1.).try_div(v2).unwrap());

    // A failed division leaves the receiver untouched.
    let mut v = Var::new(1., 1.);
    assert_eq!(
        v.try_div_assign(Var::scalar(0.)),
        Err(EvalError::DivisionByZero)
    );
    assert_eq!(v, Var::new(1., 1.));
}
