//! Render-ready snapshots for the presentation boundary.
//!
//! The presentation layer never walks ledger internals; it takes these
//! derived views per render. Prices arrive pre-formatted so templates stay
//! free of money arithmetic.

use garritas_core::Price;
use serde::Serialize;

use crate::cart::{Cart, CartEntry};
use crate::catalog::{Catalog, Product};
use crate::favorites::Favorites;
use crate::state::AppState;

/// Format a price as a display string.
fn format_price(price: &Price) -> String {
    price.display()
}

/// Product card display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    /// Whether the product is currently in the favorites set.
    pub favored: bool,
}

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
    pub image: String,
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// An empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }
}

/// Favorites display data: favorite products as cards, id order.
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesView {
    pub items: Vec<ProductCardView>,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            id: entry.product.id.as_i32(),
            name: entry.product.name.clone(),
            quantity: entry.quantity,
            price: format_price(&entry.product.price),
            line_price: format_price(&entry.line_total()),
            image: entry.product.image.clone(),
        }
    }
}

impl ProductCardView {
    fn for_product(product: &Product, favorites: &Favorites) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: format_price(&product.price),
            image: product.image.clone(),
            favored: favorites.contains(product.id),
        }
    }
}

// =============================================================================
// View Builders
// =============================================================================

/// Catalog as product cards, in catalog order.
#[must_use]
pub fn product_cards(catalog: &Catalog, favorites: &Favorites) -> Vec<ProductCardView> {
    catalog
        .iter()
        .map(|product| ProductCardView::for_product(product, favorites))
        .collect()
}

/// Cart snapshot with a subtotal in the store currency.
#[must_use]
pub fn cart_view(cart: &Cart, total: &Price) -> CartView {
    CartView {
        items: cart.iter().map(CartItemView::from).collect(),
        subtotal: format_price(total),
        item_count: cart.item_count(),
    }
}

/// Favorites resolved against the catalog, id order.
///
/// Ids without a catalog product are skipped; the state container prevents
/// them from being marked in the first place.
#[must_use]
pub fn favorites_view(catalog: &Catalog, favorites: &Favorites) -> FavoritesView {
    FavoritesView {
        items: favorites
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|product| ProductCardView::for_product(product, favorites))
            .collect(),
    }
}

impl AppState {
    /// Product cards for the storefront page.
    #[must_use]
    pub fn product_cards(&self) -> Vec<ProductCardView> {
        product_cards(self.catalog(), self.favorites())
    }

    /// Current cart view.
    #[must_use]
    pub fn cart_view(&self) -> CartView {
        cart_view(self.cart(), &self.total_price())
    }

    /// Current favorites view.
    #[must_use]
    pub fn favorites_view(&self) -> FavoritesView {
        favorites_view(self.catalog(), self.favorites())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use garritas_core::ProductId;

    use super::*;

    fn demo_state() -> AppState {
        AppState::demo()
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_cart_view_formats_lines() {
        let mut state = demo_state();
        state.add_to_cart(ProductId::new(1)).unwrap();
        state.add_to_cart(ProductId::new(1)).unwrap();

        let view = state.cart_view();
        assert_eq!(view.items.len(), 1);
        let item = view.items.first().unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, "$10000.00");
        assert_eq!(item.line_price, "$20000.00");
        assert_eq!(view.subtotal, "$20000.00");
        assert_eq!(view.item_count, 2);
    }

    #[test]
    fn test_fresh_state_cart_view_matches_empty() {
        let state = demo_state();
        let view = state.cart_view();
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, CartView::empty().subtotal);
    }

    #[test]
    fn test_product_cards_follow_catalog_order() {
        let state = demo_state();
        let cards = state.product_cards();
        assert_eq!(cards.len(), 8);
        assert_eq!(cards.first().unwrap().name, "Dog collar");
        assert!(!cards.first().unwrap().favored);
    }

    #[test]
    fn test_favorites_view_resolves_products() {
        let mut state = demo_state();
        state.toggle_favorite(ProductId::new(2)).unwrap();

        let view = state.favorites_view();
        assert_eq!(view.items.len(), 1);
        let card = view.items.first().unwrap();
        assert_eq!(card.id, 2);
        assert_eq!(card.name, "Cat nail clippers");
        assert!(card.favored);
    }

    #[test]
    fn test_cards_reflect_favorites() {
        let mut state = demo_state();
        state.toggle_favorite(ProductId::new(3)).unwrap();
        let cards = state.product_cards();
        let card = cards.iter().find(|c| c.id == 3).unwrap();
        assert!(card.favored);
    }
}
