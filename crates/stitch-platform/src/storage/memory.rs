//! In-memory storage backend.
//! Fastest option but not persistent across page reloads.

use std::cell::RefCell;
use std::collections::HashMap;
use stitch_core::ports::StoragePort;
use stitch_types::Result;

pub struct MemoryStorage {
    data: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
