//! Application state owned by the presentation root.
//!
//! [`AppState`] is the single state container for a storefront session. The
//! presentation layer reads the catalog and the ledger through accessors and
//! drives mutations through the id-based operations; nothing else in the
//! process holds store state, and there are no globals.
//!
//! All operations are synchronous and run to completion; the container is
//! mutated through `&mut self` only, matching the single-threaded UI event
//! loop it is designed to sit under.

use garritas_core::{Price, ProductId};
use tracing::instrument;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::favorites::Favorites;

/// Storefront session state: catalog plus the basket ledger.
///
/// The cart and favorites start empty and live exactly as long as this
/// value; dropping it ends the session with no trace.
#[derive(Debug, Clone)]
pub struct AppState {
    config: StoreConfig,
    catalog: Catalog,
    cart: Cart,
    favorites: Favorites,
}

impl AppState {
    /// Create session state over the given catalog.
    #[must_use]
    pub fn new(config: StoreConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog,
            cart: Cart::new(),
            favorites: Favorites::new(),
        }
    }

    /// Session state over the built-in demo catalog.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(StoreConfig::default(), Catalog::demo())
    }

    /// Store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read-only view of the favorites set.
    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Add one unit of the given product to the cart.
    ///
    /// The id is resolved against the catalog first, which keeps cart keys a
    /// subset of catalog ids.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if the id is not in the
    /// catalog.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<()> {
        let Some(product) = self.catalog.get(id) else {
            tracing::warn!(product_id = %id, "add_to_cart for id outside the catalog");
            return Err(StoreError::UnknownProduct(id));
        };
        self.cart.add(product);
        tracing::debug!(product_id = %id, quantity = self.cart.quantity(id), "added to cart");
        Ok(())
    }

    /// Remove one unit of the given product from the cart.
    ///
    /// Decrements the quantity, deleting the entry when it reaches zero.
    /// Removing an id that is not in the cart is a no-op.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove(id);
        tracing::debug!(product_id = %id, quantity = self.cart.quantity(id), "removed from cart");
    }

    /// Toggle the given product in the favorites set.
    ///
    /// Returns `true` if the product is a favorite after the call.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownProduct`] if the id is not in the
    /// catalog.
    #[instrument(skip(self))]
    pub fn toggle_favorite(&mut self, id: ProductId) -> Result<bool> {
        if !self.catalog.contains(id) {
            tracing::warn!(product_id = %id, "toggle_favorite for id outside the catalog");
            return Err(StoreError::UnknownProduct(id));
        }
        let favored = self.favorites.toggle(id);
        tracing::debug!(product_id = %id, favored, "toggled favorite");
        Ok(favored)
    }

    /// Total price of the cart in the store currency.
    ///
    /// An empty cart totals zero.
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::new(self.cart.total_amount(), self.config.currency)
    }
}
