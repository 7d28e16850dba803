use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the three coefficients of `a·x² + b·x + c = 0`.
///
/// Carried by [`Error`](crate::Error) to report which input failed
/// validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coefficient {
    /// The quadratic (leading) coefficient.
    A,
    /// The linear coefficient.
    B,
    /// The constant term.
    C,
}

impl Coefficient {
    /// Returns the coefficient's name as it appears in error messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
