//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The gateway could not be reached (connection refused, DNS, timeout...)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The gateway answered with a non-success status
    #[error("Gateway returned HTTP {status}: {message}")]
    GatewayStatus { status: u16, message: String },

    /// The response body was not a country list
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Client configuration is unusable (bad gateway URL, TLS backend...)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// 是否为预期行为（请求有误等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::GatewayStatus { status, .. } if (400..500).contains(status))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
