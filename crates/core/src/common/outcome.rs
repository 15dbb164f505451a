//! Branch outcome type.

use std::fmt;

/// A branch direction, either predicted or resolved.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The branch falls through.
    NotTaken = 0,
    /// The branch jumps to its target.
    Taken = 1,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Taken`].
    #[inline]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken)
    }
}

impl std::ops::Not for Outcome {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Self::NotTaken => Self::Taken,
            Self::Taken => Self::NotTaken,
        }
    }
}

impl From<bool> for Outcome {
    #[inline]
    fn from(taken: bool) -> Self {
        if taken { Self::Taken } else { Self::NotTaken }
    }
}

impl From<Outcome> for bool {
    #[inline]
    fn from(outcome: Outcome) -> Self {
        outcome.is_taken()
    }
}

impl PartialEq<bool> for Outcome {
    fn eq(&self, other: &bool) -> bool {
        self.is_taken() == *other
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Taken => write!(f, "TAKEN"),
            Self::NotTaken => write!(f, "NOTTAKEN"),
        }
    }
}
