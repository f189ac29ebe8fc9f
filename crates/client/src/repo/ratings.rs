//! Rating collection with a composite-key index.
//!
//! The (user, store) pair is the logical key: at most one rating exists per
//! pair, and every write path funnels through [`RatingRepository::upsert`]
//! so the invariant holds regardless of which entry point the caller used.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use ratewise_core::{RatingId, Stars, StoreId, UserId};

use crate::models::Rating;

/// Insertion-ordered rating collection indexed by (user, store).
#[derive(Debug, Default)]
pub struct RatingRepository {
    ratings: Vec<Rating>,
    by_user_store: HashMap<(UserId, StoreId), usize>,
}

impl RatingRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `ratings`, keeping their order.
    ///
    /// When the input itself carries duplicates for a pair, the last record
    /// wins, mirroring last-write-wins semantics everywhere else.
    pub fn seed(&mut self, ratings: Vec<Rating>) {
        self.ratings = Vec::with_capacity(ratings.len());
        self.by_user_store = HashMap::with_capacity(ratings.len());
        for rating in ratings {
            self.apply(rating);
        }
    }

    /// Look up the rating for a (user, store) pair.
    #[must_use]
    pub fn get(&self, user_id: &UserId, store_id: &StoreId) -> Option<&Rating> {
        let index = *self
            .by_user_store
            .get(&(user_id.clone(), store_id.clone()))?;
        self.ratings.get(index)
    }

    /// Create the rating for a pair, or update its `stars` in place when the
    /// pair already has one. `created_at` is set once at creation and never
    /// changes on update. Returns a copy of the stored record.
    pub fn upsert(
        &mut self,
        user_id: UserId,
        store_id: StoreId,
        stars: Stars,
        now: DateTime<Utc>,
    ) -> Rating {
        self.apply(Rating {
            id: RatingId::generate(),
            user_id,
            store_id,
            stars,
            created_at: now,
        })
    }

    fn apply(&mut self, rating: Rating) -> Rating {
        let key = (rating.user_id.clone(), rating.store_id.clone());
        if let Some(&index) = self.by_user_store.get(&key)
            && let Some(existing) = self.ratings.get_mut(index)
        {
            // Update in place: identity and creation time stay put.
            existing.stars = rating.stars;
            return existing.clone();
        }
        self.by_user_store.insert(key, self.ratings.len());
        self.ratings.push(rating.clone());
        rating
    }

    /// All ratings for a store, in insertion order.
    #[must_use]
    pub fn for_store(&self, store_id: &StoreId) -> Vec<&Rating> {
        self.ratings
            .iter()
            .filter(|r| &r.store_id == store_id)
            .collect()
    }

    /// Total number of ratings across all stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
