//! User directory error types.

use thiserror::Error;

use ratewise_core::Email;

use crate::validate::ValidationErrors;

/// Errors that can occur in the user directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// One or more fields failed validation. Carries every invalid field so
    /// a caller can display all messages at once.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// An account with this email already exists.
    #[error("duplicate email: {0}")]
    DuplicateEmail(Email),
}
