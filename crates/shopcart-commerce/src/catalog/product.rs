//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Names are never blank and prices never negative; both rules hold for
/// products built in code and for products read back from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Product {
    /// Create a validated product.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, CommerceError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has an empty name",
                id
            )));
        }

        if price.is_negative() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has a negative price {}",
                id,
                price.amount()
            )));
        }

        Ok(Self {
            id,
            name,
            price,
            description: None,
        })
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Unvalidated product as persisted.
#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    price: Money,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product = Product::new(record.id, record.name, record.price)?;
        Ok(match record.description {
            Some(description) => product.with_description(description),
            None => product,
        })
    }
}
