//! Garritas Core - Shared types library.
//!
//! This crate provides common types used across all Garritas components:
//! - `storefront` - Catalog, basket ledger, and presentation-facing state
//! - `integration-tests` - End-to-end scenarios over the public operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no state, no side effects.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and decimal prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
