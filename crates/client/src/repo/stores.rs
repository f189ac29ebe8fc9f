//! Store collection with insertion-ordered storage and an ID index.

use std::collections::HashMap;

use ratewise_core::{Email, StoreId, UserId};

use crate::models::Store;

/// Insertion-ordered store collection.
#[derive(Debug, Default)]
pub struct StoreRepository {
    stores: Vec<Store>,
    by_id: HashMap<StoreId, usize>,
}

impl StoreRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `stores`, keeping their order.
    pub fn seed(&mut self, stores: Vec<Store>) {
        self.stores = stores;
        self.by_id = self
            .stores
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
    }

    /// Append a store.
    pub fn insert(&mut self, store: Store) {
        self.by_id.insert(store.id.clone(), self.stores.len());
        self.stores.push(store);
    }

    /// Whether a store with this ID exists.
    #[must_use]
    pub fn contains(&self, id: &StoreId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Look up a store by ID.
    #[must_use]
    pub fn get(&self, id: &StoreId) -> Option<&Store> {
        self.by_id.get(id).and_then(|&i| self.stores.get(i))
    }

    /// Look up a store by ID for mutation.
    pub fn get_mut(&mut self, id: &StoreId) -> Option<&mut Store> {
        let index = *self.by_id.get(id)?;
        self.stores.get_mut(index)
    }

    /// Find a store by contact email, case-insensitively.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<&Store> {
        self.stores.iter().find(|s| s.email.eq_ignore_case(email))
    }

    /// Find the first store managed by `owner_id`, in insertion order.
    #[must_use]
    pub fn find_by_owner(&self, owner_id: &UserId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.owner_id == owner_id)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Store> {
        self.stores.iter()
    }

    /// Number of stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
