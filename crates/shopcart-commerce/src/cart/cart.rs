//! Cart and cart line types.

use std::collections::HashSet;

use crate::cart::Quantity;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Lines keep insertion order and there is at most one line per product.
/// Persisted as a bare JSON array of lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing lines, rejecting two lines for one product.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            if !seen.insert(line.id) {
                return Err(CommerceError::DuplicateLine(line.id));
            }
        }
        Ok(Self { lines })
    }

    /// Add a product to the cart.
    ///
    /// If the product already has a line its quantity grows; the name and
    /// price captured when the line was created are kept. Otherwise a new
    /// line is appended with the product's current name and price.
    pub fn add(&mut self, product: &Product, qty: Quantity) -> Result<(), CommerceError> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == product.id()) {
            existing.qty = existing
                .qty
                .checked_add(qty)
                .ok_or(CommerceError::Overflow)?;
            return Ok(());
        }

        self.lines.push(CartLine::from_product(product, qty));
        Ok(())
    }

    /// Sum of `price * qty` over all lines, not rounded.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let line_totals = self
            .lines
            .iter()
            .map(CartLine::total)
            .collect::<Result<Vec<_>, _>>()?;

        Money::try_sum(line_totals.iter()).ok_or(CommerceError::Overflow)
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> Result<i64, CommerceError> {
        count_items(&self.lines)
    }

    /// Get number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product.
    pub fn get_line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }
}

/// Sum of line quantities, `Overflow` past `i64::MAX`.
pub(crate) fn count_items(lines: &[CartLine]) -> Result<i64, CommerceError> {
    lines
        .iter()
        .try_fold(0i64, |acc, line| acc.checked_add(line.qty.get()))
        .ok_or(CommerceError::Overflow)
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CommerceError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        Cart::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Id of the product this line was built from.
    pub id: ProductId,
    /// Product name when the line was created.
    pub name: String,
    /// Unit price when the line was created.
    pub price: Money,
    /// Quantity.
    pub qty: Quantity,
}

impl CartLine {
    /// Snapshot a product into a new line.
    pub fn from_product(product: &Product, qty: Quantity) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            price: product.price(),
            qty,
        }
    }

    /// Line total (price * qty).
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.qty.get())
            .ok_or(CommerceError::Overflow)
    }
}
