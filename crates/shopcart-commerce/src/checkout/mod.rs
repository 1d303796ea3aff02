//! Checkout module.
//!
//! Contains the outcome of a checkout and the receipt it produces.

mod receipt;

pub use receipt::{Checkout, Receipt, CART_EMPTY, CHECKOUT_SUCCESSFUL};
