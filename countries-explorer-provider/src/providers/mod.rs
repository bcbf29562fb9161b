//! Country provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod rest_countries;

pub use rest_countries::RestCountriesProvider;
