//! Rating service error types.

use thiserror::Error;

use ratewise_core::{Email, StoreId};

use crate::validate::ValidationErrors;

/// Errors that can occur in the rating aggregation service.
#[derive(Debug, Error)]
pub enum RatingError {
    /// The caller holds no session; every rating is attributed to a user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Stars outside the 1-5 range.
    #[error("invalid rating value: {stars}")]
    InvalidRatingValue {
        /// The rejected value.
        stars: u8,
    },

    /// The store ID does not resolve.
    #[error("unknown store: {0}")]
    UnknownStore(StoreId),

    /// One or more fields failed validation. Carries every invalid field so
    /// a caller can display all messages at once.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A store with this contact email already exists.
    #[error("duplicate email: {0}")]
    DuplicateEmail(Email),
}
