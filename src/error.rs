use std::fmt::Display;

/// An error that aborts the single forward evaluation in progress.
///
/// Every fallible operation returns one of these instead of panicking, so a
/// failure propagates as a value through the expression and up to the
/// gradient driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalError {
    /// A division whose divisor's value component is exactly zero.
    DivisionByZero,
    /// Natural logarithm of a non-positive value.
    LogNonPositive { value: f64 },
    /// Power with base zero and a non-positive exponent; the value or its
    /// derivative is singular at the origin.
    PowSingular { base: f64, exponent: f64 },
}

impl Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::LogNonPositive { value } => {
                write!(f, "log of non-positive number {value}")
            }
            Self::PowSingular { base, exponent } => {
                write!(f, "power {base}^{exponent} is singular")
            }
        }
    }
}

impl std::error::Error for EvalError {}
