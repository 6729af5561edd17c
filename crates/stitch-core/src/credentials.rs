//! Durable credential store backed by a `StoragePort`.
//!
//! Loaded once at startup; written only on an explicit save. Reads never
//! fail the caller: anything unreadable becomes the empty set.

use std::cell::RefCell;
use std::rc::Rc;

use stitch_types::{
    Result,
    credentials::{CredentialSet, CREDENTIALS_STORAGE_KEY},
    event::ClientEvent,
};
use crate::event_bus::EventBus;
use crate::ports::StoragePort;

pub struct CredentialStore {
    storage: Rc<dyn StoragePort>,
    current: RefCell<CredentialSet>,
    event_bus: EventBus,
}

impl CredentialStore {
    pub fn new(storage: Rc<dyn StoragePort>, event_bus: EventBus) -> Self {
        Self {
            storage,
            current: RefCell::new(CredentialSet::default()),
            event_bus,
        }
    }

    /// Read the persisted set and make it current.
    pub fn load(&self) -> CredentialSet {
        let loaded = match self.storage.get(CREDENTIALS_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<CredentialSet>(&raw) {
                Ok(creds) => {
                    log::info!("Credentials restored from {}", self.storage.backend_name());
                    creds
                }
                Err(e) => {
                    log::warn!("Stored credentials are malformed ({}), using defaults", e);
                    CredentialSet::default()
                }
            },
            Ok(None) => CredentialSet::default(),
            Err(e) => {
                log::warn!("Could not read credentials ({}), using defaults", e);
                CredentialSet::default()
            }
        };
        *self.current.borrow_mut() = loaded.clone();
        loaded
    }

    /// Replace the current set and persist it whole. The in-memory set is
    /// replaced even when the write fails.
    pub fn save(&self, creds: CredentialSet) -> Result<()> {
        let json = serde_json::to_string(&creds)?;
        *self.current.borrow_mut() = creds;

        let persisted = self.storage.set(CREDENTIALS_STORAGE_KEY, &json);
        match &persisted {
            Ok(()) => log::info!("Credentials saved to {}", self.storage.backend_name()),
            Err(e) => log::error!("Failed to persist credentials: {}", e),
        }
        self.event_bus.emit(ClientEvent::CredentialsSaved {
            persisted: persisted.is_ok(),
        });
        persisted
    }

    /// Snapshot of the current set
    pub fn current(&self) -> CredentialSet {
        self.current.borrow().clone()
    }
}
