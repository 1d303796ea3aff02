//! Catalog, cart and checkout logic for the shopcart workspace.
//!
//! - **Catalog**: products a cart line can reference, read-only to the cart
//! - **Cart**: ordered lines with merge-on-add semantics
//! - **Checkout**: totals the cart, hands back a receipt and empties it
//!
//! Both collections live behind [`shopcart_store::Store`], so the services
//! work the same over JSON files or memory.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopcart_commerce::prelude::*;
//! use shopcart_store::JsonFileStore;
//!
//! let carts = CartService::new(
//!     JsonFileStore::<Catalog>::new("product.json"),
//!     JsonFileStore::<Cart>::new("cart_data.json"),
//! );
//!
//! carts.add_to_cart(ProductId::new(1), 3)?;
//! carts.add_to_cart(ProductId::new(1), 2)?;
//!
//! match carts.checkout()? {
//!     Checkout::Empty => println!("nothing to pay"),
//!     Checkout::Completed(receipt) => println!("Total: {}", receipt.total),
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogService, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartService, Quantity};

    // Checkout
    pub use crate::checkout::{Checkout, Receipt};
}
