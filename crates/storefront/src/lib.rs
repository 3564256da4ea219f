//! Garritas Storefront library.
//!
//! The in-process core of a small pet-supplies storefront: an immutable
//! product [`catalog`], the basket ledger ([`cart`] and [`favorites`]), and
//! the [`state`] container a presentation root owns and drives. The [`views`]
//! module produces render-ready snapshots so the presentation layer never
//! reaches into ledger internals.
//!
//! There is no server, database, or persistence here - state lives for one
//! session and is mutated synchronously through [`state::AppState`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod state;
pub mod views;

pub use cart::{Cart, CartEntry};
pub use catalog::{Catalog, CatalogError, Product};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use favorites::Favorites;
pub use state::AppState;
