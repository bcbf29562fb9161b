//! 配置服务
//!
//! 配置保存在 `<config_dir>/countries-explorer/config.json`，
//! 文件不存在时使用默认配置。配置只读，程序不会写回。

use std::path::PathBuf;

use countries_explorer_core::services::DEFAULT_GATEWAY_URL;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖 Gateway 地址的环境变量
pub const GATEWAY_URL_ENV: &str = "COUNTRIES_GATEWAY_URL";

/// 配置服务错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Gateway 地址
    pub gateway_url: String,
    /// 界面语言（BCP 47）
    pub language: String,
    /// 数字格式使用的区域
    pub number_locale: String,
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            language: "en-US".to_string(),
            number_locale: "en-US".to_string(),
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖（空值忽略）
    pub fn apply_gateway_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            log::info!("Gateway URL overridden by {GATEWAY_URL_ENV}: {url}");
            self.gateway_url = url;
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("countries-explorer")
        .join("config.json")
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(default_config_file())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
