//! Countries Explorer gateway
//!
//! A pass-through HTTP layer in front of the country data provider:
//! - `GET /countries` → every record
//! - `GET /countries/{name}` → first match, or 404
//!
//! Upstream failures become `500 {"message": ...}`. Nothing is cached or
//! transformed.

use std::sync::Arc;

use countries_explorer_provider::CountryProvider;

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use handlers::configure;
pub use middleware::{RequestId, cors_headers};

/// Shared by all workers.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CountryProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CountryProvider>) -> Self {
        Self { provider }
    }
}
