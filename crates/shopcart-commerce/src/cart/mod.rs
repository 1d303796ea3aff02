//! Shopping cart module.
//!
//! Contains the cart, its lines, the quantity type and the cart service.

mod cart;
mod quantity;
mod service;

pub use cart::{Cart, CartLine};
pub(crate) use cart::count_items;
pub use quantity::Quantity;
pub use service::{CartService, ADDED_TO_CART, CART_CLEARED};
