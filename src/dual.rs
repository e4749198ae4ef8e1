use crate::error::EvalError;

/// A first-order dual number: a value paired with a tangent, the derivative
/// along the seed direction chosen when the inputs were constructed.
///
/// The four arithmetic operations are closed over these pairs:
/// addition and subtraction are componentwise, multiplication follows the
/// product rule and division the quotient rule. All operations are pure and
/// return a new `Dual`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Dual {
    pub value: f64,
    pub tangent: f64,
}

impl Dual {
    pub fn new(value: f64, tangent: f64) -> Self {
        Self { value, tangent }
    }

    /// A constant, carrying no derivative.
    pub fn constant(value: f64) -> Self {
        Self { value, tangent: 0. }
    }

    /// Quotient rule, (a/b, (a′b − ab′)/b²). The divisor's value is checked
    /// before anything is computed.
    pub fn try_div(self, rhs: Self) -> Result<Self, EvalError> {
        if rhs.value == 0. {
            return Err(EvalError::DivisionByZero);
        }
        Ok(Self {
            value: self.value / rhs.value,
            tangent: (self.tangent * rhs.value - self.value * rhs.tangent)
                / (rhs.value * rhs.value),
        })
    }
}

impl std::ops::Add for Dual {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.value,
            tangent: self.tangent + rhs.tangent,
        }
    }
}

impl std::ops::Sub for Dual {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - rhs.value,
            tangent: self.tangent - rhs.tangent,
        }
    }
}

impl std::ops::Mul for Dual {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        // Product rule: (uv)′ = u′v + uv′
        Self {
            value: self.value * rhs.value,
            tangent: self.tangent * rhs.value + self.value * rhs.tangent,
        }
    }
}

impl std::ops::Neg for Dual {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            tangent: -self.tangent,
        }
    }
}

#[test]
fn test_algebra() {
    let d1 = Dual::new(1., 2.);
    let d2 = Dual::new(3., 4.);
    assert_eq!(d1 + d2, Dual::new(4., 6.));
    assert_eq!(d1 - d2, Dual::new(-2., -2.));
    assert_eq!(d1 * d2, Dual::new(3., 10.));
    assert_eq!(-d1, Dual::new(-1., -2.));

    let d4 = Dual::new(1., 2.);
    let d5 = Dual::new(20., -10.);
    assert_eq!(d4 * d5, Dual::new(20., 30.));
    assert_eq!(d4 * d5, d5 * d4);
    assert_eq!(d5.try_div(d4), Ok(Dual::new(20., -50.)));
}

#[test]
fn test_div_by_zero() {
    let d = Dual::new(1., 1.);
    assert_eq!(
        d.try_div(Dual::constant(0.)),
        Err(EvalError::DivisionByZero)
    );
}

#[test]
fn test_constant() {
    let c = Dual::constant(42.);
    assert_eq!(c.value, 42.);
    assert_eq!(c.tangent, 0.);
}
