//! JS-facing client: the only surface the presentation shell talks to.
//!
//! The shell calls in with user actions, reads state back as plain JSON
//! values, and drains events each frame to decide whether to re-render.

use std::rc::Rc;

use gloo_utils::format::JsValueSerdeExt;
use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use stitch_core::credentials::CredentialStore;
use stitch_core::event_bus::EventBus;
use stitch_core::library::{ClipLibrarySync, PollHandle};
use stitch_core::ports::{BackendPort, StoragePort, TimerPort};
use stitch_core::session::{AssistantSession, SendOutcome};
use stitch_platform::storage::auto_detect_storage;
use stitch_platform::{GlooTimer, HttpBackend};
use stitch_types::{
    Result, StitchError,
    clip::ClipView,
    config::ClientConfig,
    credentials::CredentialSet,
};

#[wasm_bindgen]
pub struct StitchClient {
    config: ClientConfig,
    event_bus: EventBus,
    credentials: Rc<CredentialStore>,
    session: AssistantSession,
    library: ClipLibrarySync,
    poller: Option<PollHandle>,
}

impl StitchClient {
    /// Wire the core against explicit ports and load stored credentials.
    pub fn with_ports(
        config: ClientConfig,
        backend: Rc<dyn BackendPort>,
        timer: Rc<dyn TimerPort>,
        storage: Rc<dyn StoragePort>,
    ) -> Self {
        let event_bus = EventBus::new();
        let credentials = Rc::new(CredentialStore::new(storage, event_bus.clone()));
        credentials.load();

        let session = AssistantSession::new(
            &config,
            backend.clone(),
            timer.clone(),
            credentials.clone(),
            event_bus.clone(),
        );
        let library = ClipLibrarySync::new(&config, backend, timer, event_bus.clone());

        Self {
            config,
            event_bus,
            credentials,
            session,
            library,
            poller: None,
        }
    }
}

#[wasm_bindgen]
impl StitchClient {
    /// `config_json` is an optional, possibly partial, `ClientConfig` as JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> std::result::Result<StitchClient, JsValue> {
        let config = parse_config(config_json.as_deref()).map_err(to_js_error)?;
        log::info!("Backend: {}", config.backend.base_url);

        let backend = Rc::new(HttpBackend::new(config.backend.clone()));
        Ok(Self::with_ports(
            config,
            backend,
            Rc::new(GlooTimer),
            auto_detect_storage(),
        ))
    }

    // ── Assistant session ────────────────────────────────

    /// Submit a user turn. The user turn and the busy flag are visible as
    /// soon as this returns. Resolves to "rejected", "replied" or "failed".
    pub fn send(&self, text: String) -> Promise {
        let pending = self.session.send(&text);
        future_to_promise(async move {
            let outcome = match pending.await {
                SendOutcome::Rejected => "rejected",
                SendOutcome::Replied => "replied",
                SendOutcome::Failed { .. } => "failed",
            };
            Ok(JsValue::from_str(outcome))
        })
    }

    pub fn messages(&self) -> std::result::Result<JsValue, JsValue> {
        to_js_value(&self.session.messages())
    }

    /// Transcript and status in one read: `{ messages, status }`.
    pub fn session(&self) -> std::result::Result<JsValue, JsValue> {
        to_js_value(&self.session.state())
    }

    #[wasm_bindgen(js_name = isBusy)]
    pub fn is_busy(&self) -> bool {
        self.session.is_pending()
    }

    // ── Clip library ─────────────────────────────────────

    /// Current clips with their display fields (`kindLabel`, `isImage`,
    /// `hasThumbnail`).
    pub fn clips(&self) -> std::result::Result<JsValue, JsValue> {
        let views: Vec<ClipView> = self.library.clips().iter().map(ClipView::from).collect();
        to_js_value(&views)
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.library.is_loading()
    }

    #[wasm_bindgen(js_name = showsEmptyPlaceholder)]
    pub fn shows_empty_placeholder(&self) -> bool {
        self.library.state().shows_empty_placeholder()
    }

    #[wasm_bindgen(js_name = lastSyncedAt)]
    pub fn last_synced_at(&self) -> Option<String> {
        self.library.state().last_synced_at
    }

    /// Manual refresh. Resolves to whether the list was replaced.
    pub fn refresh(&self) -> Promise {
        let library = self.library.clone();
        future_to_promise(async move { Ok(JsValue::from_bool(library.refresh().await)) })
    }

    /// Start the periodic sync for the owning view. Calling it again while
    /// polling is a no-op.
    #[wasm_bindgen(js_name = startPolling)]
    pub fn start_polling(&mut self) {
        if self.poller.is_some() {
            log::debug!("Clip polling already running");
            return;
        }
        let (task, handle) = self.library.start_polling();
        spawn_local(task);
        self.poller = Some(handle);
    }

    /// Release the polling loop. Safe to call more than once.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.cancel();
        }
    }

    #[wasm_bindgen(js_name = isPolling)]
    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    // ── Credentials ──────────────────────────────────────

    pub fn credentials(&self) -> std::result::Result<JsValue, JsValue> {
        to_js_value(&self.credentials.current())
    }

    /// Replace and persist the whole credential set. Missing fields are
    /// stored as empty strings.
    #[wasm_bindgen(js_name = saveCredentials)]
    pub fn save_credentials(&self, value: JsValue) -> std::result::Result<(), JsValue> {
        let creds: CredentialSet = value
            .into_serde()
            .map_err(|e| to_js_error(StitchError::from(e)))?;
        self.credentials.save(creds).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = preferredProvider)]
    pub fn preferred_provider(&self) -> Option<String> {
        self.credentials
            .current()
            .preferred_provider()
            .map(|p| p.label().to_string())
    }

    // ── Shell plumbing ───────────────────────────────────

    /// All events since the last call, oldest first.
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&self) -> std::result::Result<JsValue, JsValue> {
        to_js_value(&self.event_bus.drain())
    }

    #[wasm_bindgen(js_name = hasPendingEvents)]
    pub fn has_pending_events(&self) -> bool {
        self.event_bus.has_pending()
    }

    pub fn config(&self) -> std::result::Result<JsValue, JsValue> {
        to_js_value(&self.config)
    }
}

/// Parse and validate an optional JSON config; `None` or blank means defaults.
pub fn parse_config(raw: Option<&str>) -> Result<ClientConfig> {
    let config = match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => serde_json::from_str::<ClientConfig>(json)?,
        None => ClientConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn to_js_value<T: Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    JsValue::from_serde(value).map_err(|e| to_js_error(StitchError::from(e)))
}

fn to_js_error(e: StitchError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
