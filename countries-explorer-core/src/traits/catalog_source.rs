//! Catalog data source abstraction Trait

use async_trait::async_trait;
use countries_explorer_provider::Country;

use crate::error::CoreResult;

/// Where the full country list comes from.
///
/// Abstracts the transport so the catalog can be loaded from the gateway over
/// HTTP ([`GatewayClient`](crate::GatewayClient)) or from an in-memory mock in
/// tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every country, in source order.
    ///
    /// # Errors
    /// Any transport failure or non-success status. An empty list is a
    /// successful (if unusual) answer.
    async fn fetch_catalog(&self) -> CoreResult<Vec<Country>>;
}
