//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::RestCountriesProvider;
use crate::traits::CountryProvider;
use crate::types::ProviderConfig;

/// Creates a [`CountryProvider`] from the given configuration.
///
/// The returned provider is wrapped in `Arc<dyn CountryProvider>` for easy
/// sharing across request handlers.
///
/// # Examples
///
/// ```rust,no_run
/// use countries_explorer_provider::{create_provider, ProviderConfig};
///
/// let provider = create_provider(&ProviderConfig::default()).unwrap();
/// ```
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn CountryProvider>> {
    Ok(Arc::new(RestCountriesProvider::new(config)?))
}
