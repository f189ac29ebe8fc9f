//! Star rating value.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Stars`] value.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarsError {
    /// The value is outside the 1-5 range.
    #[error("rating must be between 1 and 5 stars, got {0}")]
    OutOfRange(u8),
}

/// A star rating in the range 1-5.
///
/// Constructed through [`Stars::new`], so a value outside the range cannot
/// exist. Serializes as a plain integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    /// Minimum rating value.
    pub const MIN: u8 = 1;
    /// Maximum rating value.
    pub const MAX: u8 = 5;

    /// Create a `Stars` value.
    ///
    /// # Errors
    ///
    /// Returns `StarsError::OutOfRange` if `value` is not in `1..=5`.
    pub const fn new(value: u8) -> Result<Self, StarsError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(StarsError::OutOfRange(value))
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Stars {
    type Error = StarsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

impl std::fmt::Display for Stars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_full_range() {
        for value in 1..=5 {
            assert_eq!(Stars::new(value).unwrap().get(), value);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(matches!(Stars::new(0), Err(StarsError::OutOfRange(0))));
        assert!(matches!(Stars::new(6), Err(StarsError::OutOfRange(6))));
    }

    #[test]
    fn test_serde_as_integer() {
        let stars = Stars::new(4).unwrap();
        assert_eq!(serde_json::to_string(&stars).unwrap(), "4");

        let parsed: Stars = serde_json::from_str("5").unwrap();
        assert_eq!(parsed.get(), 5);

        assert!(serde_json::from_str::<Stars>("9").is_err());
    }
}
