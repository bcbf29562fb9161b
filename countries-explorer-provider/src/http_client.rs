//! Generic HTTP client tools
//!
//! Sending a request, logging it, and reading the response body are the same for
//! every endpoint; interpreting the status code is not, so callers receive the
//! raw status and body and decide themselves.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, query, headers)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - for any HTTP status, success or not
    /// * `Err(ProviderError::Timeout)` - the request timed out
    /// * `Err(ProviderError::NetworkError)` - the request could not be sent or the body could not be read
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider_name.to_string(),
                    detail: format!("Timed out reading response body: {e}"),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("Failed to read response body: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Build the error for a non-success status
    ///
    /// The provider's `message` field is used when the body is a JSON error
    /// object, otherwise the (truncated) raw body.
    pub fn status_error(status_code: u16, response_text: &str, provider_name: &str) -> ProviderError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let raw_message = serde_json::from_str::<ErrorBody>(response_text)
            .map(|body| body.message)
            .ok()
            .or_else(|| {
                let trimmed = response_text.trim();
                (!trimmed.is_empty()).then(|| truncate_for_log(trimmed))
            });

        ProviderError::UpstreamStatus {
            provider: provider_name.to_string(),
            status: status_code,
            raw_message,
        }
    }
}
