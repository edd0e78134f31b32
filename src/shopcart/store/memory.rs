use super::KeyValueStore;
use crate::error::{CartError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since the cart is single-threaded.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Raw stored text for `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl KeyValueStore for InMemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CartError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{LineItem, ProductId};
    use crate::store;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seed `key` with the given `(id, quantity)` pairs.
        pub fn with_items(self, key: &str, items: &[(u64, u32)]) -> Self {
            let items: Vec<LineItem> = items
                .iter()
                .map(|&(id, quantity)| LineItem::new(ProductId(id), quantity))
                .collect();
            store::write(&self.store, key, &items).unwrap();
            self
        }

        pub fn with_raw(self, key: &str, raw: &str) -> Self {
            self.store.save_raw(key, raw).unwrap();
            self
        }
    }
}
