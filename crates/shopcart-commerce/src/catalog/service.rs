//! Catalog service.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shopcart_store::Store;

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Acknowledgment for [`CatalogService::add_product`].
pub const PRODUCT_ADDED: &str = "Product added successfully";

/// Read and administer the product catalog.
///
/// The cart never writes the catalog; `add_product` is the only writer and
/// serializes itself through an internal lock.
#[derive(Debug)]
pub struct CatalogService<C> {
    catalog: C,
    lock: Mutex<()>,
}

impl<C> CatalogService<C>
where
    C: Store<Catalog>,
{
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            lock: Mutex::new(()),
        }
    }

    /// Return the full catalog, empty when none has been stored yet.
    pub fn list_products(&self) -> Result<Catalog, CommerceError> {
        self.catalog.load().map_err(CommerceError::StorageRead)
    }

    /// Look up a single product.
    pub fn find_product(&self, id: ProductId) -> Result<Product, CommerceError> {
        self.list_products()?
            .find(id)
            .cloned()
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Append a product to the catalog.
    #[tracing::instrument(skip_all, fields(product_id = %product.id()))]
    pub fn add_product(&self, product: Product) -> Result<(), CommerceError> {
        let _guard = self.guard();

        let mut catalog = self.list_products()?;
        catalog.insert(product)?;
        self.catalog
            .save(&catalog)
            .map_err(CommerceError::StorageWrite)?;

        tracing::info!(products = catalog.len(), "product added to catalog");
        Ok(())
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The lock guards no data of its own, so a poisoned lock is still usable.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use shopcart_store::MemoryStore;

    fn pen() -> Product {
        Product::new(ProductId::new(1), "Pen", Money::from_cents(150)).unwrap()
    }

    #[test]
    fn test_list_products_empty_store() {
        let service = CatalogService::new(MemoryStore::<Catalog>::new());
        assert!(service.list_products().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_find() {
        let service = CatalogService::new(MemoryStore::<Catalog>::new());
        service.add_product(pen()).unwrap();

        let found = service.find_product(ProductId::new(1)).unwrap();
        assert_eq!(found, pen());
    }

    #[test]
    fn test_find_missing_product() {
        let service = CatalogService::new(MemoryStore::<Catalog>::new());
        let result = service.find_product(ProductId::new(9));
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
    }

    #[test]
    fn test_add_duplicate_leaves_catalog_unchanged() {
        let store = MemoryStore::<Catalog>::new();
        let service = CatalogService::new(&store);
        service.add_product(pen()).unwrap();

        let result = service.add_product(pen());

        assert!(matches!(result, Err(CommerceError::DuplicateProduct(_))));
        assert_eq!(store.write_count(), 1);
        assert_eq!(service.list_products().unwrap().len(), 1);
    }
}
