use serde::{Deserialize, Serialize};

/// The real roots of a quadratic equation.
///
/// A quadratic has either no real roots or exactly two; a double root is
/// two equal values, never collapsed to one. This type makes any other
/// cardinality unrepresentable, so [`len`](Self::len) is always 0 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Roots {
    /// The discriminant was negative: no real roots.
    None,
    /// Both real roots, the `+` branch of the quadratic formula first.
    Pair([f64; 2]),
}

impl Roots {
    /// Returns the roots as a slice of length 0 or 2.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::None => &[],
            Self::Pair(pair) => pair,
        }
    }

    /// Returns the number of real roots: 0 or 2, never 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the equation has no real roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns both roots, or `None` if there are no real roots.
    #[must_use]
    pub fn pair(self) -> Option<[f64; 2]> {
        match self {
            Self::None => None,
            Self::Pair(pair) => Some(pair),
        }
    }
}
