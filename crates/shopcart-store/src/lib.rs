//! Whole-document persistence for the shopcart workspace.
//!
//! Every collection is loaded in full, mutated in memory and written back in
//! full. The [`Store`] trait captures exactly those two capabilities so the
//! commerce services never depend on a concrete backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopcart_store::{JsonFileStore, Store};
//!
//! let store = JsonFileStore::<Vec<u32>>::new("numbers.json");
//!
//! // Absent file loads as the default value
//! let mut numbers = store.load()?;
//! numbers.push(7);
//!
//! // The whole document is replaced
//! store.save(&numbers)?;
//! ```

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

/// A backend holding a single document of type `T`.
pub trait Store<T>: Send + Sync {
    /// Load the whole document.
    ///
    /// A backend that has never been written returns its empty value. Content
    /// that exists but cannot be decoded is an error, never an empty value.
    fn load(&self) -> Result<T, StoreError>;

    /// Replace the whole document.
    fn save(&self, value: &T) -> Result<(), StoreError>;
}

impl<T, S> Store<T> for Arc<S>
where
    S: Store<T> + ?Sized,
{
    fn load(&self) -> Result<T, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        (**self).save(value)
    }
}

impl<T, S> Store<T> for &S
where
    S: Store<T> + ?Sized,
{
    fn load(&self) -> Result<T, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        (**self).save(value)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{JsonFileStore, MemoryStore, Store, StoreError};
}
