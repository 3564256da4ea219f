//! Shopping cart ledger.
//!
//! The cart is a keyed quantity map: product id to entry, where an entry
//! holds a product snapshot and a quantity that is always at least 1. An
//! entry whose quantity would reach 0 is deleted, never kept at 0.

use std::collections::BTreeMap;

use garritas_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A cart line: product snapshot plus quantity.
///
/// Invariant: `quantity >= 1`. The cart deletes entries instead of storing
/// a zero quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Number of units, always >= 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Total price of this line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.line_total(self.quantity)
    }
}

/// In-memory shopping cart keyed by product id.
///
/// Iteration order is by product id, so renders are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: BTreeMap<ProductId, CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the quantity if the product is already in the cart,
    /// otherwise inserts a new entry with quantity 1.
    pub fn add(&mut self, product: &Product) {
        self.entries
            .entry(product.id)
            .and_modify(|entry| entry.quantity = entry.quantity.saturating_add(1))
            .or_insert_with(|| CartEntry {
                product: product.clone(),
                quantity: 1,
            });
    }

    /// Remove one unit of the product with the given id.
    ///
    /// Decrements the quantity if it is above 1, deletes the entry if it is
    /// exactly 1, and does nothing if the id is not in the cart. The absent
    /// case is deliberately a no-op so a stale UI event can never crash the
    /// session.
    pub fn remove(&mut self, id: ProductId) {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.quantity > 1 => entry.quantity -= 1,
            Some(_) => {
                self.entries.remove(&id);
            }
            None => {
                tracing::debug!(product_id = %id, "remove on absent cart entry ignored");
            }
        }
    }

    /// Entry for the given product id, if present.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.get(&id)
    }

    /// Quantity of the given product, 0 if absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.entries.get(&id).map_or(0, |entry| entry.quantity)
    }

    /// Entries ordered by product id.
    pub fn iter(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .values()
            .fold(0, |count, entry| count.saturating_add(entry.quantity))
    }

    /// Sum of unit price x quantity over all entries.
    ///
    /// Returns a bare decimal amount; the state container attaches the store
    /// currency. An empty cart totals zero.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.entries.values().fold(Decimal::ZERO, |total, entry| {
            total.saturating_add(entry.line_total().amount)
        })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = std::collections::btree_map::Values<'a, ProductId, CartEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
