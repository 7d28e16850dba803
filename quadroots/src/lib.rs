//! Real-root solver for quadratic equations `a·x² + b·x + c = 0`.
//!
//! The crate has two entry points:
//!
//! - [`solve`] takes three possibly-missing coefficients, validates them,
//!   and returns the equation's real roots.
//! - [`Quadratic`] is a validated equation type for callers that want to
//!   hold on to an equation and query it (discriminant, evaluation, roots).
//!
//! Validation is strict: every coefficient must be a finite number, and the
//! leading coefficient `a` must not be within [`ZERO_TOLERANCE`] of zero.
//! The same tolerance snaps a near-zero discriminant to exactly `0.0`
//! before the square-root step, so a double root always comes back as two
//! bit-identical values instead of two values separated by rounding noise.
//!
//! The result type is [`Roots`], which holds either no roots or exactly
//! two. A repeated root is represented as two equal values, never collapsed
//! to one, so the root count is always 0 or 2.
//!
//! # Examples
//!
//! ```
//! use quadroots::{Roots, solve};
//!
//! // x² - 1 = 0 has roots 1 and -1 (the `+` branch of ± comes first).
//! let roots = solve(Some(1.0), Some(0.0), Some(-1.0)).unwrap();
//! assert_eq!(roots, Roots::Pair([1.0, -1.0]));
//!
//! // x² + 1 = 0 has no real roots.
//! let roots = solve(Some(1.0), Some(0.0), Some(1.0)).unwrap();
//! assert!(roots.is_empty());
//!
//! // A degenerate equation is rejected.
//! let error = solve(Some(0.0), Some(2.0), Some(1.0)).unwrap_err();
//! assert_eq!(error.to_string(), "a must be not null or 0");
//! ```

mod coefficient;
mod equation;
mod error;
mod roots;
mod solve;
mod tolerance;

pub use coefficient::Coefficient;
pub use equation::Quadratic;
pub use error::Error;
pub use roots::Roots;
pub use solve::solve;
pub use tolerance::ZERO_TOLERANCE;
