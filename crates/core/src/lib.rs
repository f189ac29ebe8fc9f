//! Ratewise Core - Shared types library.
//!
//! This crate provides common types used across all Ratewise components:
//! - `client` - Embedded client core (sessions, ratings, dashboards)
//! - `integration-tests` - End-to-end scenarios over the wired services
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no local
//! storage. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, roles, and
//!   star ratings

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
