//! 国家目录

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use countries_explorer_provider::Country;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::filter::FilterState;
use crate::traits::CatalogSource;

/// The once-fetched country list for a session.
///
/// Read-only after construction. Order is the source's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    countries: Vec<Country>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Fetch the full list from `source`.
    ///
    /// A failure never produces a partial catalog.
    pub async fn load(source: &dyn CatalogSource) -> CoreResult<Self> {
        let countries = source.fetch_catalog().await?;
        log::info!("Catalog loaded: {} countries", countries.len());
        Ok(Self::from_countries(countries))
    }

    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self {
            countries,
            loaded_at: Utc::now(),
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Look a country up by its `cca3` code.
    pub fn get(&self, cca3: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.cca3 == cca3)
    }

    /// Distinct regions, sorted ascending. Records without a region are skipped.
    pub fn regions_present(&self) -> Vec<String> {
        self.countries
            .iter()
            .map(Country::region_name)
            .filter(|r| !r.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }

    /// The visible subset for `filter`.
    pub fn visible(&self, filter: &FilterState) -> Vec<&Country> {
        filter.apply(&self.countries)
    }
}
