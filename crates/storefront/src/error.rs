//! Storefront error type.
//!
//! The state container has exactly one runtime failure mode: the presentation
//! layer handing it a product id the catalog does not contain. Everything
//! else (including removing an absent cart entry) is a total operation.

use garritas_core::ProductId;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Catalog construction failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The given id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
