//! Commerce error types.

use shopcart_store::StoreError;
use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Requested quantity is not a positive integer.
    #[error("Quantity must be greater than 0, got {0}")]
    InvalidQuantity(i64),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A product with this id already exists.
    #[error("Product ID already exists: {0}")]
    DuplicateProduct(ProductId),

    /// Product data failed validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// A cart holds two lines for the same product.
    #[error("Cart holds more than one line for product {0}")]
    DuplicateLine(ProductId),

    /// Arithmetic overflow in a quantity or amount.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Persisted state could not be loaded.
    #[error("Storage read error: {0}")]
    StorageRead(#[source] StoreError),

    /// State could not be persisted.
    #[error("Storage write error: {0}")]
    StorageWrite(#[source] StoreError),
}

impl CommerceError {
    /// Whether the caller can fix the request and try again.
    ///
    /// Everything else is an operational fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidQuantity(_)
                | CommerceError::ProductNotFound(_)
                | CommerceError::DuplicateProduct(_)
                | CommerceError::InvalidProduct(_)
        )
    }
}
