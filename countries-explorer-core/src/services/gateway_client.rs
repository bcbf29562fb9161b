//! Gateway HTTP 客户端

use std::time::Duration;

use async_trait::async_trait;
use countries_explorer_provider::Country;
use reqwest::Client;

use crate::error::{CoreError, CoreResult};
use crate::traits::CatalogSource;

/// Where the gateway listens by default.
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:5008";

const CONNECT_TIMEOUT_SECS: u64 = 10;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Loads the catalog from the gateway's `GET /countries`.
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> CoreResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CoreError::ConfigError(format!(
                "Gateway URL must start with http:// or https://: {base_url:?}"
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CoreError::ConfigError(format!("HTTP client initialization failed: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into an error, preferring the gateway's
    /// `{"message": ...}` body.
    fn status_error(status: u16, body: &str) -> CoreError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "no response body".to_string()
                } else {
                    trimmed.chars().take(200).collect()
                }
            });
        CoreError::GatewayStatus { status, message }
    }
}

#[async_trait]
impl CatalogSource for GatewayClient {
    async fn fetch_catalog(&self) -> CoreResult<Vec<Country>> {
        let url = format!("{}/countries", self.base_url);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::NetworkError(format!("Request to {url} timed out"))
            } else {
                CoreError::NetworkError(format!("Could not reach {url}: {e}"))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(Self::status_error(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| CoreError::SerializationError(format!("Invalid country list: {e}")))
    }
}
