//! `window.localStorage` backend.
//! Persistent across page reloads; synchronous, string-valued.

use web_sys::Storage;

use stitch_core::ports::StoragePort;
use stitch_types::{Result, StitchError};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StitchError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StitchError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| StitchError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StitchError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StitchError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
