//! Cache types for backend API responses.

use crate::models::{Store, User};

/// Cache key for the bulk reads.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Stores,
    Users,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Stores(Vec<Store>),
    Users(Vec<User>),
}
