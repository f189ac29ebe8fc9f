//! Field-tagged validation.
//!
//! Validation runs to completion across every field before anything is
//! reported, so a caller can surface one message per invalid field in a
//! single pass. Nothing mutates until the whole collection is empty.

use std::fmt;

use ratewise_core::{Email, EmailError};

/// Name length bounds shared by users and stores.
pub const NAME_MIN: usize = 20;
/// Maximum name length.
pub const NAME_MAX: usize = 60;
/// Maximum address length.
pub const ADDRESS_MAX: usize = 400;
/// Password length bounds.
pub const PASSWORD_MIN: usize = 8;
/// Maximum password length.
pub const PASSWORD_MAX: usize = 16;

/// Characters counted as "special" by the password policy.
const PASSWORD_SPECIAL: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the failure is tagged with.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A collection of field failures; one entry per invalid field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether any field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the failures in field order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// The failure recorded for `field`, if any.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collection itself when at least one field failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Check a display name: 20-60 characters.
pub fn check_name(errors: &mut ValidationErrors, field: &'static str, name: &str) {
    let len = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        errors.push(
            field,
            format!("must be between {NAME_MIN} and {NAME_MAX} characters"),
        );
    }
}

/// Check a postal address: at most 400 characters.
pub fn check_address(errors: &mut ValidationErrors, address: &str) {
    if address.chars().count() > ADDRESS_MAX {
        errors.push("address", format!("must not exceed {ADDRESS_MAX} characters"));
    }
}

/// Check an email address; returns the parsed value when valid.
pub fn check_email(errors: &mut ValidationErrors, email: &str) -> Option<Email> {
    match Email::parse(email) {
        Ok(email) => Some(email),
        Err(e) => {
            let message = match e {
                EmailError::TooLong { max } => {
                    format!("must be at most {max} characters")
                }
                _ => "must be a valid email address".to_owned(),
            };
            errors.push("email", message);
            None
        }
    }
}

/// Check a password: 8-16 characters with at least one uppercase letter and
/// one special character.
pub fn check_password(errors: &mut ValidationErrors, password: &str) {
    let len = password.chars().count();
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL.contains(c));

    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) || !has_upper || !has_special {
        errors.push(
            "password",
            format!(
                "must be {PASSWORD_MIN}-{PASSWORD_MAX} characters with at least one uppercase \
                 letter and one special character"
            ),
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_boundaries() {
        for (len, ok) in [(19, false), (20, true), (60, true), (61, false)] {
            let mut errors = ValidationErrors::new();
            check_name(&mut errors, "name", &"x".repeat(len));
            assert_eq!(errors.is_empty(), ok, "name of length {len}");
        }
    }

    #[test]
    fn test_address_boundary() {
        let mut errors = ValidationErrors::new();
        check_address(&mut errors, &"x".repeat(400));
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        check_address(&mut errors, &"x".repeat(401));
        assert!(errors.field("address").is_some());
    }

    #[test]
    fn test_email_shapes() {
        let mut errors = ValidationErrors::new();
        assert!(check_email(&mut errors, "a@b.co").is_some());
        assert!(errors.is_empty());

        let mut errors = ValidationErrors::new();
        assert!(check_email(&mut errors, "not-an-email").is_none());
        assert!(errors.field("email").is_some());
    }

    #[test]
    fn test_password_policy() {
        let ok = ["Passw0rd!", "A!aaaaaa", "Abcdefg,hijklmno"];
        for password in ok {
            let mut errors = ValidationErrors::new();
            check_password(&mut errors, password);
            assert!(errors.is_empty(), "expected {password:?} to pass");
        }

        let bad = [
            "Short!A",           // 7 chars
            "Toolongpassword!A", // 17 chars
            "nouppercase!",      // no uppercase
            "NoSpecial1",        // no special character
        ];
        for password in bad {
            let mut errors = ValidationErrors::new();
            check_password(&mut errors, password);
            assert!(errors.field("password").is_some(), "expected {password:?} to fail");
        }
    }

    #[test]
    fn test_collects_every_invalid_field() {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", "short");
        check_email(&mut errors, "nope");
        check_address(&mut errors, &"x".repeat(500));
        check_password(&mut errors, "weak");

        assert_eq!(errors.iter().count(), 4);
        assert!(errors.field("name").is_some());
        assert!(errors.field("email").is_some());
        assert!(errors.field("address").is_some());
        assert!(errors.field("password").is_some());
        assert!(errors.into_result().is_err());
    }
}
