//! Checkout outcome and receipt types.

use crate::cart::{count_items, CartLine};
use crate::error::CommerceError;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Message reported when checkout finds nothing to pay for.
pub const CART_EMPTY: &str = "Cart is empty";

/// Message reported with a receipt.
pub const CHECKOUT_SUCCESSFUL: &str = "Checkout successful";

/// What the customer paid for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Sum of `price * qty`, rounded to cents.
    #[serde(rename = "total_price")]
    pub total: Money,
    /// The cart lines as they were just before checkout.
    #[serde(rename = "items")]
    pub lines: Vec<CartLine>,
    /// When the cart was checked out.
    pub checked_out_at: DateTime<Utc>,
}

impl Receipt {
    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> Result<i64, CommerceError> {
        count_items(&self.lines)
    }
}

/// Outcome of a checkout.
#[derive(Debug, Clone, PartialEq)]
pub enum Checkout {
    /// The cart was already empty; nothing was written.
    Empty,
    /// The cart was totalled and emptied.
    Completed(Receipt),
}

impl Checkout {
    /// Human-readable summary.
    pub fn message(&self) -> &'static str {
        match self {
            Checkout::Empty => CART_EMPTY,
            Checkout::Completed(_) => CHECKOUT_SUCCESSFUL,
        }
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        match self {
            Checkout::Empty => None,
            Checkout::Completed(receipt) => Some(receipt),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Checkout::Empty)
    }
}

impl Serialize for Checkout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            message: &'static str,
            #[serde(flatten)]
            receipt: Option<&'a Receipt>,
        }

        Body {
            message: self.message(),
            receipt: self.receipt(),
        }
        .serialize(serializer)
    }
}
