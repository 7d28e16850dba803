use thiserror::Error;

use crate::coefficient::Coefficient;

/// Errors that can occur when validating quadratic equation coefficients.
///
/// Every variant is a caller-input problem reported synchronously; there is
/// no recoverable/fatal distinction and nothing to retry. The `Display`
/// text of each variant is part of the crate's contract and is asserted in
/// tests. A negative discriminant is not an error: it is a successful solve
/// with no real roots.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No value was supplied for the coefficient.
    #[error("{coefficient} must be not null")]
    Missing { coefficient: Coefficient },

    /// The coefficient was NaN.
    #[error("{coefficient} must be not NaN")]
    NotANumber { coefficient: Coefficient },

    /// The coefficient was positive or negative infinity.
    #[error("{coefficient} must be not infinite")]
    Infinite { coefficient: Coefficient },

    /// The leading coefficient was within [`ZERO_TOLERANCE`] of zero, so
    /// the equation is not quadratic.
    ///
    /// [`ZERO_TOLERANCE`]: crate::ZERO_TOLERANCE
    #[error("a must be not null or 0")]
    ZeroLeadingCoefficient,
}
