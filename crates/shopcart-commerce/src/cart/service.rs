//! Cart service.
//!
//! Every operation reads the catalog and cart from their stores, works on
//! the in-memory copy and writes the whole cart back. Nothing is cached
//! between calls.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use shopcart_store::Store;

use crate::cart::{Cart, Quantity};
use crate::catalog::Catalog;
use crate::checkout::{Checkout, Receipt};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Acknowledgment for [`CartService::add_to_cart`].
pub const ADDED_TO_CART: &str = "Product added to cart successfully";

/// Acknowledgment for [`CartService::clear_cart`].
pub const CART_CLEARED: &str = "Cart cleared successfully";

/// Orchestrates cart operations over a catalog store and a cart store.
///
/// Load-modify-save sequences run under an internal lock, so concurrent
/// calls through one service never lose each other's updates. Other
/// processes writing the same files are not coordinated with.
#[derive(Debug)]
pub struct CartService<C, K> {
    catalog: C,
    cart: K,
    lock: Mutex<()>,
}

impl<C, K> CartService<C, K>
where
    C: Store<Catalog>,
    K: Store<Cart>,
{
    pub fn new(catalog: C, cart: K) -> Self {
        Self {
            catalog,
            cart,
            lock: Mutex::new(()),
        }
    }

    /// Add `qty` of a catalog product to the cart.
    ///
    /// The quantity is checked first, then the product. Adding a product
    /// that already has a line increases that line's quantity.
    #[tracing::instrument(skip_all, fields(product_id = %product_id, qty = qty))]
    pub fn add_to_cart(&self, product_id: ProductId, qty: i64) -> Result<(), CommerceError> {
        let qty = Quantity::new(qty)?;
        let _guard = self.guard();

        let catalog = self.catalog.load().map_err(CommerceError::StorageRead)?;
        let product = catalog
            .find(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;

        let mut cart = self.load_cart()?;
        cart.add(product, qty)?;
        self.save_cart(&cart)?;

        tracing::info!(lines = cart.len(), "product added to cart");
        Ok(())
    }

    /// Return the current cart, empty when none has been stored yet.
    pub fn view_cart(&self) -> Result<Cart, CommerceError> {
        self.load_cart()
    }

    /// Cart total rounded to cents.
    pub fn compute_total(&self) -> Result<Money, CommerceError> {
        Ok(self.load_cart()?.subtotal()?.rounded())
    }

    /// Total the cart, empty it and hand back a receipt.
    ///
    /// An empty cart short-circuits to [`Checkout::Empty`] without writing.
    #[tracing::instrument(skip_all)]
    pub fn checkout(&self) -> Result<Checkout, CommerceError> {
        let _guard = self.guard();

        let cart = self.load_cart()?;
        if cart.is_empty() {
            tracing::info!("checkout on empty cart");
            return Ok(Checkout::Empty);
        }

        let total = cart.subtotal()?.rounded();
        self.save_cart(&Cart::new())?;

        tracing::info!(lines = cart.len(), total = %total, "checkout completed");
        Ok(Checkout::Completed(Receipt {
            total,
            lines: cart.into_lines(),
            checked_out_at: Utc::now(),
        }))
    }

    /// Empty the cart whatever it holds.
    #[tracing::instrument(skip_all)]
    pub fn clear_cart(&self) -> Result<(), CommerceError> {
        let _guard = self.guard();
        self.save_cart(&Cart::new())?;
        tracing::info!("cart cleared");
        Ok(())
    }

    fn load_cart(&self) -> Result<Cart, CommerceError> {
        self.cart.load().map_err(CommerceError::StorageRead)
    }

    fn save_cart(&self, cart: &Cart) -> Result<(), CommerceError> {
        self.cart.save(cart).map_err(CommerceError::StorageWrite)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The lock guards no data of its own, so a poisoned lock is still usable.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
