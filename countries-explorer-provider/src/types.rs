use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============ Country ============

/// A single country record as published by the upstream provider.
///
/// Only the fields the explorer reads are modelled. Every other upstream field
/// (`tld`, `borders`, `latlng`, ...) is kept verbatim in [`extra`](Self::extra)
/// so that serializing a record yields the same JSON structure the provider sent.
///
/// Optional attributes are `Option`s; a record missing any of them is still a
/// valid record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Common and official names.
    pub name: CountryName,

    /// ISO 3166-1 alpha-3 code. The only stable identity key.
    pub cca3: String,

    /// Continental region (e.g. `Europe`, `Americas`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,

    /// Capital cities, in upstream order. Some countries have several.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,

    /// Area in km².
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,

    /// Currency code → currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,

    /// Language code → display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Flags>,

    /// Flag emoji.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,

    /// International dialing information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idd: Option<Idd>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps: Option<Maps>,

    /// Upstream fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Country {
    /// Capital cities, empty when the record has none.
    pub fn capitals(&self) -> &[String] {
        self.capital.as_deref().unwrap_or_default()
    }

    /// First listed capital, if any.
    pub fn first_capital(&self) -> Option<&str> {
        self.capitals().first().map(String::as_str)
    }

    /// Region name, empty when the record has none.
    pub fn region_name(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }
}

/// Country names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    /// `nativeName` and anything else the provider adds.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A currency entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Flag image references.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// International direct dialing: root prefix plus suffixes (`+3` + `3` for France).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Idd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffixes: Option<Vec<String>>,
}

/// Map links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Maps {
    #[serde(
        rename = "googleMaps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub google_maps: Option<String>,
    #[serde(
        rename = "openStreetMaps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub open_street_maps: Option<String>,
}

// ============ Provider configuration ============

/// Default REST Countries endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from `/all` by default.
///
/// REST Countries rejects `/all` without a `fields` projection and allows at
/// most ten fields.
pub const DEFAULT_ALL_FIELDS: [&str; 10] = [
    "name",
    "cca3",
    "capital",
    "region",
    "subregion",
    "population",
    "area",
    "flags",
    "currencies",
    "languages",
];

/// Fields fetched by the second `/all` request and merged into the first by `cca3`.
///
/// These are the detail-page fields that do not fit in [`DEFAULT_ALL_FIELDS`].
pub const DEFAULT_DETAIL_FIELDS: [&str; 4] = ["cca3", "idd", "maps", "flag"];

/// Settings for [`RestCountriesProvider`](crate::RestCountriesProvider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// `fields=` projection for `/all`. Empty sends no projection.
    pub all_fields: Vec<String>,
    /// Second `/all` projection merged into the first by `cca3`. Empty skips it.
    pub detail_fields: Vec<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            all_fields: DEFAULT_ALL_FIELDS.iter().map(ToString::to_string).collect(),
            detail_fields: DEFAULT_DETAIL_FIELDS.iter().map(ToString::to_string).collect(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
