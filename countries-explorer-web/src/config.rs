//! Gateway configuration
//!
//! Read from an optional TOML file. `PORT` in the environment overrides the
//! listen port.

use std::path::{Path, PathBuf};

use anyhow::Context;
use countries_explorer_provider::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "COUNTRIES_EXPLORER_CONFIG";
/// Used when [`CONFIG_PATH_ENV`] is unset; may be absent.
pub const DEFAULT_CONFIG_PATH: &str = "countries-explorer.toml";
pub const DEFAULT_PORT: u16 = 5008;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; unset or 0 means one per CPU.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `countries_explorer_web=debug`.
    /// `RUST_LOG` wins when set.
    pub level: String,
    pub json: bool,
    /// Write daily-rotated files here instead of stdout.
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            dir: None,
        }
    }
}

impl GatewayConfig {
    /// Load from `$COUNTRIES_EXPLORER_CONFIG` (or `countries-explorer.toml`)
    /// and apply `$PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_path(Path::new(&path))?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_port_override(&mut self, port: Option<&str>) -> anyhow::Result<()> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.server.port = port
                .parse()
                .with_context(|| format!("PORT must be a port number, got {port:?}"))?;
        }
        Ok(())
    }

    pub fn workers(&self) -> usize {
        self.server
            .workers
            .filter(|n| *n > 0)
            .unwrap_or_else(num_cpus::get)
    }
}
