use crate::{coefficient::Coefficient, equation::Quadratic, error::Error, roots::Roots};

/// Computes the real roots of `a·x² + b·x + c = 0`.
///
/// Coefficients are optional so inputs can be passed straight through from
/// sources where a value may be absent. Each coefficient is checked for
/// presence and finiteness in `a`, `b`, `c` order; whether `a` is (near)
/// zero is checked only after all three coefficients pass.
///
/// The returned [`Roots`] holds zero or exactly two values. See
/// [`Quadratic::roots`] for the discriminant snapping policy.
///
/// # Errors
///
/// Returns an error if any coefficient is missing, NaN, or infinite, or if
/// `a` is within [`ZERO_TOLERANCE`](crate::ZERO_TOLERANCE) of zero.
///
/// # Examples
///
/// ```
/// use quadroots::{Roots, solve};
///
/// assert_eq!(
///     solve(Some(1.0), Some(0.0), Some(-1.0)),
///     Ok(Roots::Pair([1.0, -1.0]))
/// );
///
/// let error = solve(Some(1.0), None, Some(1.0)).unwrap_err();
/// assert_eq!(error.to_string(), "b must be not null");
/// ```
pub fn solve(a: Option<f64>, b: Option<f64>, c: Option<f64>) -> Result<Roots, Error> {
    let a = validate_coefficient(a, Coefficient::A)?;
    let b = validate_coefficient(b, Coefficient::B)?;
    let c = validate_coefficient(c, Coefficient::C)?;

    Ok(Quadratic::new(a, b, c)?.roots())
}

/// Checks that a single coefficient is present and finite.
fn validate_coefficient(value: Option<f64>, coefficient: Coefficient) -> Result<f64, Error> {
    let value = value.ok_or(Error::Missing { coefficient })?;

    if value.is_nan() {
        return Err(Error::NotANumber { coefficient });
    }
    if value.is_infinite() {
        return Err(Error::Infinite { coefficient });
    }

    Ok(value)
}
