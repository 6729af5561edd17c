//! Pick the best available storage backend.
//!
//! Priority: localStorage → Memory (fallback, e.g. Node or private mode)

use std::rc::Rc;
use stitch_core::ports::StoragePort;
use super::{LocalStorage, MemoryStorage};

/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_storage() -> Rc<dyn StoragePort> {
    match LocalStorage::open() {
        Ok(local) => {
            log::info!("Storage backend: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}
