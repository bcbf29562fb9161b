//! Data source abstraction trait definition

mod catalog_source;

pub use catalog_source::CatalogSource;
