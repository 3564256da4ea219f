//! Favorites ledger.
//!
//! A plain membership set over product ids. Toggling is an involution:
//! applying it twice always restores the previous state.

use std::collections::BTreeSet;

use garritas_core::ProductId;
use serde::{Deserialize, Serialize};

/// Set of product ids the user has marked for later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: BTreeSet<ProductId>,
}

impl Favorites {
    /// Create an empty favorites set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle membership of the given id.
    ///
    /// Returns `true` if the id is a favorite after the call.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Whether the given id is a favorite.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorite ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no products are marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
