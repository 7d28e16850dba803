use crate::{coefficient::Coefficient, error::Error, roots::Roots, tolerance::is_near_zero};

/// A quadratic equation `a·x² + b·x + c = 0` with validated coefficients.
///
/// Construction is the validation step: every coefficient must be finite,
/// and the leading coefficient `a` must not be within
/// [`ZERO_TOLERANCE`](crate::ZERO_TOLERANCE) of zero. Once a `Quadratic`
/// exists, every operation on it is infallible.
///
/// # Examples
///
/// ```
/// use quadroots::{Quadratic, Roots};
///
/// let equation = Quadratic::new(1.0, 2.0, 1.0).unwrap();
/// assert_eq!(equation.discriminant(), 0.0);
/// assert_eq!(equation.roots(), Roots::Pair([-1.0, -1.0]));
///
/// // Not a quadratic: the leading coefficient is zero.
/// assert!(Quadratic::new(0.0, 2.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// Creates a quadratic equation from its three coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is NaN or infinite, or if `a` is
    /// within [`ZERO_TOLERANCE`](crate::ZERO_TOLERANCE) of zero. The
    /// coefficients are checked in `a`, `b`, `c` order and the first
    /// offender is reported; the near-zero check on `a` runs only after all
    /// three coefficients pass the finiteness checks.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, Error> {
        for (value, coefficient) in
            [(a, Coefficient::A), (b, Coefficient::B), (c, Coefficient::C)]
        {
            if value.is_nan() {
                return Err(Error::NotANumber { coefficient });
            }
            if value.is_infinite() {
                return Err(Error::Infinite { coefficient });
            }
        }

        if is_near_zero(a) {
            return Err(Error::ZeroLeadingCoefficient);
        }

        Ok(Self { a, b, c })
    }

    /// Returns the quadratic (leading) coefficient `a`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the linear coefficient `b`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the constant term `c`.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the discriminant `b² - 4ac`.
    ///
    /// This is the raw mathematical quantity. The near-zero snap applied
    /// while computing [`roots`](Self::roots) is root-computation policy
    /// and does not alter it.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluates `a·x² + b·x + c` at `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadroots::Quadratic;
    ///
    /// let equation = Quadratic::new(1.0, -1.0, -6.0).unwrap();
    /// assert_eq!(equation.eval(3.0), 0.0);
    /// assert_eq!(equation.eval(-2.0), 0.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// Computes the real roots of the equation.
    ///
    /// A discriminant within [`ZERO_TOLERANCE`](crate::ZERO_TOLERANCE) of
    /// zero is snapped to exactly `0.0` before the sign test and the square
    /// root, so a double root is returned as two bit-identical values. The
    /// snap happens on either side of zero: a discriminant that is negative
    /// but within the tolerance still counts as the double-root case, not
    /// as "no roots".
    #[must_use]
    pub fn roots(&self) -> Roots {
        let mut discriminant = self.discriminant();
        if is_near_zero(discriminant) {
            discriminant = 0.0;
        }

        if discriminant < 0.0 {
            return Roots::None;
        }

        let sqrt = discriminant.sqrt();
        let divisor = 2.0 * self.a;

        Roots::Pair([(-self.b + sqrt) / divisor, (-self.b - sqrt) / divisor])
    }
}

impl TryFrom<(f64, f64, f64)> for Quadratic {
    type Error = Error;

    fn try_from((a, b, c): (f64, f64, f64)) -> Result<Self, Self::Error> {
        Self::new(a, b, c)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    use crate::tolerance::ZERO_TOLERANCE;

    #[test]
    fn accepts_finite_coefficients() {
        let equation = Quadratic::new(2.0, -3.0, 0.5).unwrap();

        assert_eq!(equation.a(), 2.0);
        assert_eq!(equation.b(), -3.0);
        assert_eq!(equation.c(), 0.5);
    }

    #[test]
    fn rejects_nan_and_infinite_coefficients() {
        assert_eq!(
            Quadratic::new(f64::NAN, 1.0, 1.0),
            Err(Error::NotANumber {
                coefficient: Coefficient::A,
            })
        );
        assert_eq!(
            Quadratic::new(1.0, f64::INFINITY, 1.0),
            Err(Error::Infinite {
                coefficient: Coefficient::B,
            })
        );
        assert_eq!(
            Quadratic::new(1.0, 1.0, f64::NEG_INFINITY),
            Err(Error::Infinite {
                coefficient: Coefficient::C,
            })
        );
    }

    #[test]
    fn reports_the_first_invalid_coefficient() {
        // Coefficients are checked in a, b, c order.
        assert_eq!(
            Quadratic::new(f64::INFINITY, f64::NAN, f64::NAN),
            Err(Error::Infinite {
                coefficient: Coefficient::A,
            })
        );
        assert_eq!(
            Quadratic::new(1.0, f64::NAN, f64::INFINITY),
            Err(Error::NotANumber {
                coefficient: Coefficient::B,
            })
        );
    }

    #[test]
    fn rejects_a_near_zero_leading_coefficient() {
        for a in [0.0, -0.0, 9.9e-7, -9.9e-7] {
            assert_eq!(Quadratic::new(a, 2.0, 1.0), Err(Error::ZeroLeadingCoefficient));
        }

        // The tolerance itself is the first accepted magnitude.
        assert!(Quadratic::new(ZERO_TOLERANCE, 2.0, 1.0).is_ok());
        assert!(Quadratic::new(-ZERO_TOLERANCE, 2.0, 1.0).is_ok());
    }

    #[test]
    fn finiteness_is_checked_before_the_near_zero_check() {
        // A zero `a` with an invalid later coefficient reports the later
        // coefficient, matching the validation order.
        assert_eq!(
            Quadratic::new(0.0, f64::NAN, 1.0),
            Err(Error::NotANumber {
                coefficient: Coefficient::B,
            })
        );
    }

    #[test]
    fn discriminant_is_the_raw_quantity() {
        let equation = Quadratic::new(1.0, 0.0, 1.0).unwrap();
        assert_eq!(equation.discriminant(), -4.0);

        // Within the snap tolerance but still reported unsnapped.
        let equation = Quadratic::new(0.0001, 0.001, 0.002).unwrap();
        let discriminant = equation.discriminant();
        assert!(discriminant > 0.0);
        assert!(discriminant < ZERO_TOLERANCE);
    }

    #[test]
    fn two_distinct_roots_with_the_plus_branch_first() {
        let equation = Quadratic::new(1.0, 0.0, -1.0).unwrap();
        assert_eq!(equation.roots(), Roots::Pair([1.0, -1.0]));

        let equation = Quadratic::new(1.0, -1.0, -6.0).unwrap();
        assert_eq!(equation.roots(), Roots::Pair([3.0, -2.0]));
    }

    #[test]
    fn negative_discriminant_has_no_real_roots() {
        let equation = Quadratic::new(1.0, 0.0, 1.0).unwrap();
        assert_eq!(equation.roots(), Roots::None);
    }

    #[test]
    fn zero_discriminant_gives_a_bit_identical_double_root() {
        let equation = Quadratic::new(1.0, 2.0, 1.0).unwrap();

        let [first, second] = equation.roots().pair().unwrap();
        assert_eq!(first, -1.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn near_zero_discriminant_is_snapped_before_the_square_root() {
        // discriminant = 2e-7, inside the tolerance.
        let equation = Quadratic::new(0.0001, 0.001, 0.002).unwrap();

        let [first, second] = equation.roots().pair().unwrap();
        assert_eq!(first, -5.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn barely_negative_discriminant_counts_as_a_double_root() {
        // discriminant = -4e-7: negative, but inside the snap tolerance,
        // so it is snapped to zero before the sign test.
        let equation = Quadratic::new(1.0, 1.0, 0.2500001).unwrap();
        assert!(equation.discriminant() < 0.0);

        let [first, second] = equation.roots().pair().unwrap();
        assert_eq!(first, -0.5);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn eval_recovers_the_constant_term_at_zero() {
        let equation = Quadratic::new(3.0, -2.0, 7.0).unwrap();
        assert_eq!(equation.eval(0.0), 7.0);
    }

    #[test]
    fn try_from_a_coefficient_triple() {
        let equation = Quadratic::try_from((1.0, 0.0, -1.0)).unwrap();
        assert_eq!(equation.roots(), Roots::Pair([1.0, -1.0]));

        assert_eq!(Quadratic::try_from((0.0, 1.0, 1.0)), Err(Error::ZeroLeadingCoefficient));
    }
}
