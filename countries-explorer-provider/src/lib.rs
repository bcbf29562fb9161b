//! # countries-explorer-provider
//!
//! Adapter for the [REST Countries](https://restcountries.com) API.
//!
//! Two read operations are exposed through the [`CountryProvider`] trait:
//!
//! | Operation | Upstream endpoint | Outcome |
//! |-----------|-------------------|---------|
//! | [`fetch_all`](CountryProvider::fetch_all) | `GET /all?fields=...` | every country, in provider order |
//! | [`fetch_by_name`](CountryProvider::fetch_by_name) | `GET /name/{name}` | first match, or `None` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use countries_explorer_provider::{create_provider, CountryProvider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = create_provider(&ProviderConfig::default())?;
//!
//!     let countries = provider.fetch_all().await?;
//!     println!("{} countries", countries.len());
//!
//!     match provider.fetch_by_name("france").await? {
//!         Some(country) => println!("{} ({})", country.name.common, country.cca3),
//!         None => println!("no match"),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). A name
//! lookup with no match is `Ok(None)`, never an error. Nothing is retried: a
//! single failure propagates immediately.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

pub use traits::CountryProvider;

// Re-export types
pub use types::{
    Country, CountryName, Currency, DEFAULT_ALL_FIELDS, DEFAULT_BASE_URL, DEFAULT_DETAIL_FIELDS,
    Flags, Idd, Maps, ProviderConfig,
};

pub use providers::RestCountriesProvider;
