//! In-memory backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::{Store, StoreError};

/// Document held in process memory.
///
/// Useful in tests and anywhere persistence is not wanted. Also counts
/// writes, so callers can check that an operation left storage untouched.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    value: Mutex<T>,
    writes: AtomicUsize,
}

impl<T> MemoryStore<T> {
    /// Create a store holding `value`.
    pub fn with_value(value: T) -> Self {
        Self {
            value: Mutex::new(value),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of successful `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl<T: Default> MemoryStore<T> {
    /// Create a store holding the empty value.
    pub fn new() -> Self {
        Self::with_value(T::default())
    }
}

impl<T> Store<T> for MemoryStore<T>
where
    T: Clone + Send,
{
    fn load(&self) -> Result<T, StoreError> {
        let guard = self
            .value
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        let mut guard = self
            .value
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *guard = value.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::<Vec<i64>>::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_save_replaces_value() {
        let store = MemoryStore::with_value(vec![1, 2, 3]);
        store.save(&vec![9]).unwrap();

        assert_eq!(store.load().unwrap(), vec![9]);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_load_returns_a_copy() {
        let store = MemoryStore::with_value(vec![1]);
        let mut loaded = store.load().unwrap();
        loaded.push(2);

        assert_eq!(store.load().unwrap(), vec![1]);
    }

    #[test]
    fn test_shared_through_arc() {
        let store = Arc::new(MemoryStore::<Vec<i64>>::new());
        let handle = Arc::clone(&store);

        handle.save(&vec![4]).unwrap();

        let loaded: Vec<i64> = store.load().unwrap();
        assert_eq!(loaded, vec![4]);
    }
}
