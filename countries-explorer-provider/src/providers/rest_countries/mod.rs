//! REST Countries Provider

mod http;
mod provider;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};
use crate::types::ProviderConfig;

pub(crate) const PROVIDER_NAME: &str = "rest-countries";

/// REST Countries (<https://restcountries.com>) provider
pub struct RestCountriesProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) all_fields: Vec<String>,
    pub(crate) detail_fields: Vec<String>,
}

impl RestCountriesProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, config)?,
            base_url: normalize_base_url(&config.base_url),
            all_fields: config.all_fields.clone(),
            detail_fields: keyed_projection(&config.detail_fields),
        })
    }
}

/// Detail projections are merged by `cca3`, so it is always requested.
fn keyed_projection(fields: &[String]) -> Vec<String> {
    if fields.is_empty() || fields.iter().any(|f| f == "cca3") {
        return fields.to_vec();
    }
    std::iter::once("cca3".to_string())
        .chain(fields.iter().cloned())
        .collect()
}
