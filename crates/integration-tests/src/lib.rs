//! Integration tests for Garritas.
//!
//! End-to-end scenarios over the public `AppState` operations, the way a
//! presentation root drives them: render the catalog, mutate the ledger
//! through callbacks, re-read the derived views.
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart quantity tracking and totals
//! - `favorites_flow` - Favorites toggling
//! - `catalog_rules` - Catalog validation and unknown-id handling
//!
//! Run with `cargo test -p garritas-integration-tests`. Set `RUST_LOG` to see
//! ledger events from the code under test.

#![cfg_attr(not(test), forbid(unsafe_code))]

use garritas_core::{CurrencyCode, Price};
use garritas_storefront::{AppState, Catalog, Product, StoreConfig};

/// Session state over a two-product fixture catalog.
///
/// Product 1 costs 10000, product 2 costs 15000, both COP - the same shape
/// (and the same first two prices) as the demo catalog, but small enough to
/// assert against exhaustively.
#[must_use]
pub fn fixture_state() -> AppState {
    let catalog = fixture_catalog();
    AppState::new(StoreConfig::default(), catalog)
}

/// The two-product fixture catalog.
///
/// # Panics
///
/// The fixture list is statically valid; construction cannot fail.
#[must_use]
pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        Product::new(
            1,
            "Dog collar",
            Price::from_units(10_000, CurrencyCode::COP),
            "collar_perro.png",
        ),
        Product::new(
            2,
            "Cat nail clippers",
            Price::from_units(15_000, CurrencyCode::COP),
            "cortaunas.png",
        ),
    ])
    .unwrap_or_else(|err| panic!("fixture catalog must be valid: {err}"))
}

/// Install a subscriber so `RUST_LOG` controls test output.
///
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
