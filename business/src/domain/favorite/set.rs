use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::shared::value_objects::ProductId;

/// Local favorite membership for the current session's user.
///
/// Membership must reflect the remote store's truth after any in-flight
/// toggle settles; during one it may transiently diverge (optimistic) and is
/// rolled back exactly on failure. Toggles on the same product are serialized
/// through a per-id lock so a slow first call's late result cannot clobber a
/// faster second one.
#[derive(Debug, Default)]
pub struct FavoriteSet {
    members: Mutex<HashSet<ProductId>>,
    toggles: Mutex<HashMap<ProductId, Arc<tokio::sync::Mutex<()>>>>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    pub fn len(&self) -> usize {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn insert(&self, id: ProductId) {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id);
    }

    pub fn remove(&self, id: &ProductId) {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);
    }

    /// Replaces the whole membership with the authoritative remote listing.
    pub fn replace(&self, ids: impl IntoIterator<Item = ProductId>) {
        *self
            .members
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = ids.into_iter().collect();
    }

    /// Clears membership on session teardown.
    pub fn clear(&self) {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Lock serializing toggles for one product id. Holding the returned
    /// mutex across the remote call enforces per-id ordering.
    pub fn toggle_lock(&self, id: &ProductId) -> Arc<tokio::sync::Mutex<()>> {
        self.toggles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id.clone())
            .or_default()
            .clone()
    }
}
