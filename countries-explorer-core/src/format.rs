//! Number formatting and placeholder rendering
//!
//! Every optional country attribute goes through [`or_placeholder`], so a
//! missing capital, subregion or dialing code always renders the same way.

use countries_explorer_provider::Country;
use serde::{Deserialize, Serialize};

/// Rendered in place of an absent optional field.
pub const PLACEHOLDER: &str = "N/A";

/// Most fraction digits shown for an area.
const AREA_FRACTION_DIGITS: usize = 3;

fn or_placeholder(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

// ============ NumberFormat ============

/// Digit grouping and decimal separators for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    pub grouping: char,
    pub decimal: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::EN_US
    }
}

impl NumberFormat {
    pub const EN_US: Self = Self {
        grouping: ',',
        decimal: '.',
    };
    pub const ZH_CN: Self = Self::EN_US;
    pub const DE_DE: Self = Self {
        grouping: '.',
        decimal: ',',
    };
    /// French groups with a narrow no-break space.
    pub const FR_FR: Self = Self {
        grouping: '\u{202f}',
        decimal: ',',
    };

    /// Pick the separators for a BCP 47 style tag (`de-DE`, `fr_FR`, `zh`).
    ///
    /// Only the language subtag is considered. Unknown languages fall back
    /// to `en-US`.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "zh" => Self::ZH_CN,
            "de" => Self::DE_DE,
            "fr" => Self::FR_FR,
            _ => Self::EN_US,
        }
    }

    /// `67391582` → `67,391,582`
    pub fn format_count(&self, n: u64) -> String {
        self.group(&n.to_string())
    }

    /// Up to three fraction digits, trailing zeros dropped.
    ///
    /// Non-finite or negative values render as the placeholder.
    pub fn format_area(&self, area: f64) -> String {
        if !area.is_finite() || area < 0.0 {
            return PLACEHOLDER.to_string();
        }
        let fixed = format!("{area:.prec$}", prec = AREA_FRACTION_DIGITS);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = self.group(int_part);
        if !frac_part.is_empty() {
            out.push(self.decimal);
            out.push_str(frac_part);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3 * self.grouping.len_utf8());
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.grouping);
            }
            out.push(ch);
        }
        out
    }
}

// ============ View models ============

/// What a listing row shows for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCard {
    pub cca3: String,
    pub common_name: String,
    pub flag: String,
    pub population: String,
    pub region: String,
    pub capital: String,
}

impl CountryCard {
    pub fn new(country: &Country, format: &NumberFormat) -> Self {
        Self {
            cca3: country.cca3.clone(),
            common_name: country.name.common.clone(),
            flag: country.flag.clone().unwrap_or_default(),
            population: or_placeholder(country.population.map(|n| format.format_count(n))),
            region: or_placeholder(country.region.clone()),
            capital: or_placeholder(country.first_capital().map(ToString::to_string)),
        }
    }
}

/// Fully rendered detail page for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    pub cca3: String,
    pub common_name: String,
    pub official_name: String,
    pub flag: String,
    pub flag_alt: String,
    pub capital: String,
    pub region: String,
    pub subregion: String,
    pub population: String,
    pub area: String,
    pub currencies: Vec<String>,
    pub languages: Vec<String>,
    pub calling_code: String,
    pub map_link: String,
}

impl CountryDetails {
    pub fn new(country: &Country, format: &NumberFormat) -> Self {
        let capital = (!country.capitals().is_empty()).then(|| country.capitals().join(", "));

        let currencies = country
            .currencies
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|m| {
                m.values()
                    .map(|c| match c.symbol.as_deref() {
                        Some(symbol) if !symbol.is_empty() => format!("{} ({symbol})", c.name),
                        _ => c.name.clone(),
                    })
                    .collect()
            })
            .unwrap_or_else(|| vec![PLACEHOLDER.to_string()]);

        let languages = country
            .languages
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|m| m.values().cloned().collect())
            .unwrap_or_else(|| vec![PLACEHOLDER.to_string()]);

        // root 缺失时整体视为缺失，suffix 只取第一个
        let calling_code = country.idd.as_ref().and_then(|idd| {
            let root = idd.root.as_deref().filter(|r| !r.is_empty())?;
            let suffix = idd
                .suffixes
                .as_ref()
                .and_then(|s| s.first())
                .map_or("", String::as_str);
            Some(format!("{root}{suffix}"))
        });

        let flag_alt = country
            .flags
            .as_ref()
            .and_then(|f| f.alt.clone())
            .filter(|alt| !alt.is_empty())
            .unwrap_or_else(|| format!("Flag of {}", country.name.common));

        Self {
            cca3: country.cca3.clone(),
            common_name: country.name.common.clone(),
            official_name: or_placeholder(Some(country.name.official.clone())),
            flag: or_placeholder(country.flag.clone()),
            flag_alt,
            capital: or_placeholder(capital),
            region: or_placeholder(country.region.clone()),
            subregion: or_placeholder(country.subregion.clone()),
            population: or_placeholder(country.population.map(|n| format.format_count(n))),
            area: or_placeholder(country.area.map(|a| with_unit(format.format_area(a), "km²"))),
            currencies,
            languages,
            calling_code: or_placeholder(calling_code),
            map_link: or_placeholder(country.maps.as_ref().and_then(|m| m.google_maps.clone())),
        }
    }
}

/// Appends a unit unless the value is the placeholder.
fn with_unit(value: String, unit: &str) -> String {
    if value == PLACEHOLDER {
        value
    } else {
        format!("{value} {unit}")
    }
}
