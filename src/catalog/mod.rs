mod service;

pub use service::{CatalogError, CatalogResult, CatalogService, CATALOG_SERVICE_SOURCE};
