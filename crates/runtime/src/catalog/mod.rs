//! Catalog service adapters.

mod http;

pub use http::{DEFAULT_CATALOG_URL, HttpCatalog};
