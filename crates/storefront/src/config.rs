//! Storefront configuration.
//!
//! Constructed programmatically by the embedding application - there are no
//! environment variables, files, or secrets to load for an in-process store.

use garritas_core::CurrencyCode;
use serde::{Deserialize, Serialize};

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store display name.
    pub store_name: String,
    /// Currency used for totals and price display.
    pub currency: CurrencyCode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Garritas Pet Shop".to_string(),
            currency: CurrencyCode::COP,
        }
    }
}
