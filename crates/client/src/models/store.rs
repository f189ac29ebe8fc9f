//! Store and rating domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ratewise_core::{Email, RatingId, Stars, StoreId, UserId};

/// A registered store with its derived rating aggregates.
///
/// `average_rating` and `total_ratings` are pure functions of the current
/// rating set for the store: 0.0 and 0 for an unrated store, otherwise the
/// one-decimal mean and the count. They are recomputed after every rating
/// mutation and never written independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Store display name.
    pub name: String,
    /// Contact email; unique across stores.
    pub email: Email,
    /// Postal address.
    pub address: String,
    /// The user who manages this store. Not unique; one owner can manage
    /// several stores.
    pub owner_id: UserId,
    /// Arithmetic mean of all ratings, rounded to one decimal place.
    pub average_rating: f64,
    /// Number of ratings referencing this store.
    pub total_ratings: u32,
}

/// A single user's rating of a store.
///
/// At most one rating exists per (user, store) pair. Re-submitting updates
/// the `stars` field in place; `created_at` is set once and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// Unique rating ID.
    pub id: RatingId,
    /// The rating user.
    pub user_id: UserId,
    /// The rated store.
    pub store_id: StoreId,
    /// Star value, 1-5.
    #[serde(rename = "rating")]
    pub stars: Stars,
    /// When the rating was first submitted.
    pub created_at: DateTime<Utc>,
}
