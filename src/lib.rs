//! Forward-mode automatic differentiation with first-order dual numbers.
//!
//! A [`Dual`] carries a value together with a tangent, the derivative along
//! the direction its inputs were seeded with, and the arithmetic rules keep
//! the two in lock step through an evaluation. [`Var`] is the user-facing
//! wrapper used to build expressions; [`gradient`] harvests a full gradient
//! by replaying the expression once per input dimension.
//!
//! ```
//! use dualgrad::{gradient, Var};
//!
//! // ∇(x·y + sin x) at (2, 3)
//! let grad = gradient(|v| Ok(v[0] * v[1] + v[0].sin()), &[2., 3.]).unwrap();
//! assert_eq!(grad[0], 3. + 2.0_f64.cos());
//! assert_eq!(grad[1], 2.);
//! ```

mod dual;
pub mod error;
mod gradient;
mod var;

pub use dual::Dual;
pub use error::EvalError;
pub use gradient::{directional, gradient};
pub use var::Var;
