//! Rating aggregation service.
//!
//! Owns the store and rating collections, enforces the one-rating-per-
//! (user, store) invariant, and recomputes a store's `average_rating` and
//! `total_ratings` after every mutation. The recompute always runs against
//! the post-mutation rating set: the upsert commits to the collection first,
//! then the aggregates are derived from what is actually stored.

mod error;

pub use error::RatingError;

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use ratewise_core::{Stars, StoreId, UserId};

use crate::models::{Rating, Session, Store};
use crate::repo::{RatingRepository, StoreRepository};
use crate::validate::{self, ValidationErrors};

use super::SortDirection;

/// Sort field for store listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSortField {
    /// Lexicographic by name, case-insensitive.
    Name,
    /// Lexicographic by contact email, case-insensitive.
    Email,
    /// Lexicographic by address, case-insensitive.
    Address,
    /// Numeric by average rating.
    AverageRating,
}

/// Store listing parameters.
///
/// The default query returns every store in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StoreQuery {
    /// Case-insensitive substring matched against name, address, and email.
    pub search: Option<String>,
    /// Sort field and direction; insertion order when absent. Sorting is
    /// stable: ties keep their prior relative order.
    pub sort: Option<(StoreSortField, SortDirection)>,
}

/// A new store registration.
#[derive(Debug, Clone)]
pub struct NewStore {
    /// Store display name, 20-60 characters.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Postal address, at most 400 characters.
    pub address: String,
    /// The managing user. Existence and role are the identity
    /// collaborator's to verify, not checked here.
    pub owner_id: UserId,
}

/// Rating aggregation service.
///
/// A plain value with no ambient state; tests build as many independent
/// instances as they need.
#[derive(Debug, Default)]
pub struct RatingService {
    stores: StoreRepository,
    ratings: RatingRepository,
}

impl RatingService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the store collection with a backend bulk read.
    ///
    /// Seeded aggregates are trusted as-is: the backend computed them from
    /// its full rating set, which may be larger than what this client holds.
    /// Local mutations recompute from the local set.
    pub fn seed_stores(&mut self, stores: Vec<Store>) {
        self.stores.seed(stores);
    }

    /// Replace the rating collection.
    pub fn seed_ratings(&mut self, ratings: Vec<Rating>) {
        self.ratings.seed(ratings);
    }

    /// List stores, optionally filtered and sorted.
    ///
    /// The filter is a case-insensitive substring match against name,
    /// address, and email. Sorting is stable, so equal keys keep their
    /// insertion order.
    #[must_use]
    pub fn list_stores(&self, query: &StoreQuery) -> Vec<Store> {
        let needle = query.search.as_ref().map(|s| s.to_lowercase());

        let mut stores: Vec<Store> = self
            .stores
            .iter()
            .filter(|store| {
                needle.as_ref().is_none_or(|needle| {
                    store.name.to_lowercase().contains(needle)
                        || store.address.to_lowercase().contains(needle)
                        || store.email.as_str().to_lowercase().contains(needle)
                })
            })
            .cloned()
            .collect();

        if let Some((field, direction)) = query.sort {
            stores.sort_by(|a, b| {
                let ordering = match field {
                    StoreSortField::Name => cmp_ignore_case(&a.name, &b.name),
                    StoreSortField::Email => cmp_ignore_case(a.email.as_str(), b.email.as_str()),
                    StoreSortField::Address => cmp_ignore_case(&a.address, &b.address),
                    StoreSortField::AverageRating => {
                        a.average_rating.total_cmp(&b.average_rating)
                    }
                };
                direction.apply(ordering)
            });
        }

        stores
    }

    /// Look up a store by ID.
    #[must_use]
    pub fn get_store(&self, store_id: &StoreId) -> Option<&Store> {
        self.stores.get(store_id)
    }

    /// Find the store managed by `owner_id`, if any.
    #[must_use]
    pub fn find_store_by_owner(&self, owner_id: &UserId) -> Option<&Store> {
        self.stores.find_by_owner(owner_id)
    }

    /// Look up the rating a user gave a store.
    #[must_use]
    pub fn get_rating(&self, user_id: &UserId, store_id: &StoreId) -> Option<Rating> {
        self.ratings.get(user_id, store_id).cloned()
    }

    /// Submit or update the caller's rating for a store, then return the
    /// store with freshly derived aggregates.
    ///
    /// If the caller already rated this store, the existing record's stars
    /// are updated in place and its `created_at` is untouched; a duplicate
    /// is never inserted, regardless of which entry point led here.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::InvalidCredentials` when `session` is absent,
    /// `RatingError::InvalidRatingValue` when `stars` is outside 1-5, and
    /// `RatingError::UnknownStore` when the store does not resolve. Nothing
    /// mutates on failure.
    pub fn submit_rating(
        &mut self,
        session: Option<&Session>,
        store_id: &StoreId,
        stars: u8,
    ) -> Result<Store, RatingError> {
        let session = session.ok_or(RatingError::InvalidCredentials)?;
        let stars = Stars::new(stars).map_err(|_| RatingError::InvalidRatingValue { stars })?;
        if !self.stores.contains(store_id) {
            return Err(RatingError::UnknownStore(store_id.clone()));
        }

        // Commit before deriving: the aggregate scan below must see the
        // rating that was just written, not a pre-mutation snapshot.
        self.ratings.upsert(
            session.user_id().clone(),
            store_id.clone(),
            stars,
            Utc::now(),
        );

        self.recompute_aggregates(store_id)
    }

    /// All ratings for a store, newest first. Ties on `created_at` keep
    /// insertion order.
    #[must_use]
    pub fn list_ratings_for_store(&self, store_id: &StoreId) -> Vec<Rating> {
        let mut ratings: Vec<Rating> = self
            .ratings
            .for_store(store_id)
            .into_iter()
            .cloned()
            .collect();
        ratings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ratings
    }

    /// Register a new store.
    ///
    /// Every field is validated before anything mutates; a new store starts
    /// unrated (0.0 average, 0 ratings). `owner_id` is not resolved against
    /// the user directory here.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::Validation` with one entry per invalid field,
    /// or `RatingError::DuplicateEmail` when a store already uses the email.
    pub fn add_store(&mut self, new_store: NewStore) -> Result<Store, RatingError> {
        let mut errors = ValidationErrors::new();
        validate::check_name(&mut errors, "name", &new_store.name);
        let email = validate::check_email(&mut errors, &new_store.email);
        validate::check_address(&mut errors, &new_store.address);
        errors.into_result()?;
        let email = email.ok_or_else(ValidationErrors::new)?;

        if self.stores.find_by_email(&email).is_some() {
            return Err(RatingError::DuplicateEmail(email));
        }

        let store = Store {
            id: StoreId::generate(),
            name: new_store.name,
            email,
            address: new_store.address,
            owner_id: new_store.owner_id,
            average_rating: 0.0,
            total_ratings: 0,
        };
        self.stores.insert(store.clone());
        tracing::info!(store = %store.id, "store registered");
        Ok(store)
    }

    /// Number of stores.
    #[must_use]
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Number of ratings across all stores.
    #[must_use]
    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    fn recompute_aggregates(&mut self, store_id: &StoreId) -> Result<Store, RatingError> {
        let ratings = self.ratings.for_store(store_id);
        let total = u32::try_from(ratings.len()).unwrap_or(u32::MAX);
        let sum: u32 = ratings.iter().map(|r| u32::from(r.stars.get())).sum();

        let average = if total == 0 {
            0.0
        } else {
            round_one_decimal(sum, total)
        };

        let store = self
            .stores
            .get_mut(store_id)
            .ok_or_else(|| RatingError::UnknownStore(store_id.clone()))?;
        store.average_rating = average;
        store.total_ratings = total;
        Ok(store.clone())
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Mean of `sum / count`, rounded to one decimal place with
/// round-half-away-from-zero.
fn round_one_decimal(sum: u32, count: u32) -> f64 {
    let mean = Decimal::from(sum) / Decimal::from(count);
    mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}
