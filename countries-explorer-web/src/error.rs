//! HTTP 错误映射

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use countries_explorer_provider::ProviderError;
use serde::Serialize;

/// Message returned for a name lookup with no match.
pub const NOT_FOUND_MESSAGE: &str = "Country not found";

/// Every failure a handler can return. Each maps to exactly one status code
/// with a `{"message": ...}` body.
#[derive(Debug)]
pub enum GatewayError {
    /// The provider had no match (404).
    NotFound,
    /// The provider failed (500).
    Upstream(ProviderError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str(NOT_FOUND_MESSAGE),
            Self::Upstream(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        if err.is_expected() {
            tracing::warn!(error = %err, "Upstream request rejected");
        } else {
            tracing::error!(error = %err, "Upstream request failed");
        }
        Self::Upstream(err)
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}
