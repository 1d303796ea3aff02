//! Line quantity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// A strictly positive item count.
///
/// Persisted as a JSON integer; a stored count of zero or less is rejected
/// when the cart is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl Quantity {
    /// Validate a requested count.
    pub fn new(qty: i64) -> Result<Self, CommerceError> {
        if qty <= 0 {
            return Err(CommerceError::InvalidQuantity(qty));
        }
        Ok(Self(qty))
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Add two quantities, returning None on overflow.
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.0).map(Quantity)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = CommerceError;

    fn try_from(qty: i64) -> Result<Self, Self::Error> {
        Quantity::new(qty)
    }
}

impl From<Quantity> for i64 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
