//! 搜索 / 地区筛选

use countries_explorer_provider::Country;
use serde::{Deserialize, Serialize};

/// Search term plus optional region.
///
/// An empty search term and `region == None` match everything. The visible
/// subset is always recomputed from the full catalog with [`apply`](Self::apply);
/// it is never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub region: Option<String>,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, region: Option<String>) -> Self {
        let mut filter = Self {
            search_term: search_term.into(),
            region: None,
        };
        filter.set_region(region);
        filter
    }

    /// Set the region, treating `Some("")` as "no region".
    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region.filter(|r| !r.is_empty());
    }

    /// `true` when neither a search term nor a region is set.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.region.is_none()
    }

    /// Whether `country` belongs to the visible subset.
    ///
    /// The search term matches case-insensitively as a substring of the
    /// common name, the official name or any of the capitals. The region
    /// must match exactly.
    pub fn matches(&self, country: &Country) -> bool {
        self.matches_region(country) && Self::matches_search(country, &self.search_term.to_lowercase())
    }

    /// Filter `countries`, keeping their relative order.
    pub fn apply<'a>(&self, countries: &'a [Country]) -> Vec<&'a Country> {
        let needle = self.search_term.to_lowercase();
        countries
            .iter()
            .filter(|c| self.matches_region(c) && Self::matches_search(c, &needle))
            .collect()
    }

    fn matches_region(&self, country: &Country) -> bool {
        self.region.as_deref().is_none_or(|r| country.region_name() == r)
    }

    fn matches_search(country: &Country, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(needle);
        hit(&country.name.common)
            || hit(&country.name.official)
            || country.capitals().iter().any(|cap| hit(cap))
    }
}
