//! Core types for Ratewise.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod role;
pub mod stars;

pub use email::{Email, EmailError};
pub use id::*;
pub use role::Role;
pub use stars::{Stars, StarsError};
