//! Countries Explorer Core Library
//!
//! Platform-independent client logic for the countries explorer:
//! - Catalog loading through the [`CatalogSource`] abstraction
//! - Search / region filtering ([`FilterState`])
//! - The listing/detail state machine ([`ViewController`])
//! - Locale-aware number formatting and placeholder rendering
//!
//! Rendering layers drive a [`ViewController`] and draw whatever its state
//! says; no network calls happen outside [`Catalog::load`].

pub mod catalog;
pub mod error;
pub mod filter;
pub mod format;
pub mod services;
pub mod traits;
pub mod view;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::Catalog;
pub use countries_explorer_provider::Country;
pub use error::{CoreError, CoreResult};
pub use filter::FilterState;
pub use format::{CountryCard, CountryDetails, NumberFormat, PLACEHOLDER};
pub use services::GatewayClient;
pub use traits::CatalogSource;
pub use view::{LoadStart, LoadTicket, Screen, ViewController, ViewState};
