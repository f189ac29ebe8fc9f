//! Ratewise Client - Embedded client core for the store-rating platform.
//!
//! Users browse stores and submit 1-5 star ratings, store owners view
//! aggregated feedback for their store, and administrators manage users and
//! stores. This crate is the domain core behind those flows, independent of
//! any UI framework: a renderer calls the services here and draws whatever
//! they return.
//!
//! # Architecture
//!
//! - [`api`] - REST client for the platform backend (login, bulk reads)
//! - [`services::auth`] - Session/identity resolution and role projection
//! - [`services::ratings`] - Store and rating collections with derived
//!   aggregates
//! - [`services::directory`] - Referenced user records for the admin view
//! - [`dashboard`] - Role-gated composition of the three dashboard variants
//! - [`session`] - Client-local persistence of the current principal
//!
//! State is never ambient: every service is an explicit instance, so tests
//! build as many independent cores as they need.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod models;
pub mod repo;
pub mod services;
pub mod session;
pub mod validate;

pub use config::{ClientConfig, ConfigError};
pub use models::{Rating, Session, Store, User};
