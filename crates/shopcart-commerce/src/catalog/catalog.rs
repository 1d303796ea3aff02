//! Catalog collection.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Ordered list of products with unique ids.
///
/// Persisted as a bare JSON array of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(CommerceError::DuplicateProduct(product.id()));
            }
        }
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Check whether a product id is present.
    pub fn contains(&self, id: ProductId) -> bool {
        self.find(id).is_some()
    }

    /// Append a product; its id must be new.
    pub fn insert(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.contains(product.id()) {
            return Err(CommerceError::DuplicateProduct(product.id()));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = CommerceError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Catalog::from_products(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: i64, name: &str, cents: i64) -> Product {
        Product::new(ProductId::new(id), name, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_find() {
        let catalog =
            Catalog::from_products(vec![product(1, "Pen", 150), product(2, "Ink", 325)]).unwrap();

        assert_eq!(catalog.find(ProductId::new(2)).unwrap().name(), "Ink");
        assert!(catalog.find(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_products(vec![product(1, "Pen", 150), product(1, "Pad", 200)]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id.get() == 1));
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.insert(product(5, "Clip", 10)).unwrap();
        catalog.insert(product(2, "Ink", 325)).unwrap();

        let ids: Vec<i64> = catalog.into_iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![5, 2]);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut catalog = Catalog::new();
        catalog.insert(product(1, "Pen", 150)).unwrap();

        assert!(catalog.insert(product(1, "Pen again", 150)).is_err());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_persisted_as_array() {
        let catalog = Catalog::from_products(vec![product(1, "Pen", 150)]).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"[{"id":1,"name":"Pen","price":1.5}]"#);

        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_load_with_duplicates_fails() {
        let result: Result<Catalog, _> = serde_json::from_str(
            r#"[{"id":1,"name":"Pen","price":1.5},{"id":1,"name":"Pad","price":2}]"#,
        );
        assert!(result.is_err());
    }
}
