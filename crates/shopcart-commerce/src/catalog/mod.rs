//! Product catalog module.
//!
//! Contains the product type, the catalog collection and its service.

mod catalog;
mod product;
mod service;

pub use catalog::Catalog;
pub use product::Product;
pub use service::{CatalogService, PRODUCT_ADDED};
