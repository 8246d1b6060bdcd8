// Service exports
pub mod catalog;

pub use catalog::{load_catalog, CatalogError, CatalogStore};
