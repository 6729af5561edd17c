//! Clip library sync: keeps a local copy of the backend's clip catalog.
//!
//! Every successful fetch replaces the list wholesale. Failures are logged
//! and otherwise ignored, so the last known good list stays visible.
//! Overlapping fetches are allowed; whichever lands last wins.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{abortable, AbortHandle, FutureExt, LocalBoxFuture};
use stitch_types::{
    Result,
    clip::Clip,
    config::ClientConfig,
    event::ClientEvent,
};
use crate::event_bus::EventBus;
use crate::ports::{BackendPort, TimerPort};
use crate::timeout::with_timeout;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    pub clips: Vec<Clip>,
    /// True while at least one fetch is outstanding
    pub loading: bool,
    /// RFC 3339 time of the last successful fetch
    pub last_synced_at: Option<String>,
}

impl SyncState {
    /// Nothing to show and nothing on the way
    pub fn shows_empty_placeholder(&self) -> bool {
        self.clips.is_empty() && !self.loading
    }
}

/// Clone-cheap handle; clones share one clip list.
#[derive(Clone)]
pub struct ClipLibrarySync {
    state: Rc<RefCell<SyncState>>,
    in_flight: Rc<Cell<usize>>,
    backend: Rc<dyn BackendPort>,
    timer: Rc<dyn TimerPort>,
    event_bus: EventBus,
    poll_interval_ms: u64,
    timeout_ms: u64,
}

impl ClipLibrarySync {
    pub fn new(
        config: &ClientConfig,
        backend: Rc<dyn BackendPort>,
        timer: Rc<dyn TimerPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(SyncState::default())),
            in_flight: Rc::new(Cell::new(0)),
            backend,
            timer,
            event_bus,
            poll_interval_ms: config.sync.poll_interval_ms,
            timeout_ms: config.sync.request_timeout_ms,
        }
    }

    /// Fetch the full catalog once and replace the local list on success.
    pub async fn fetch(&self) -> Result<Vec<Clip>> {
        let guard = LoadingGuard::begin(self.state.clone(), self.in_flight.clone());
        self.event_bus.emit(ClientEvent::ClipsLoading);

        let result = with_timeout(
            self.timer.as_ref(),
            self.timeout_ms,
            self.backend.list_clips(),
        )
        .await;

        match &result {
            Ok(clips) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.clips = clips.clone();
                    state.last_synced_at = Some(chrono::Utc::now().to_rfc3339());
                }
                log::debug!("Clip library synced: {} clips", clips.len());
                self.event_bus.emit(ClientEvent::ClipsUpdated { count: clips.len() });
            }
            Err(e) => {
                log::warn!("Failed to fetch clips: {}", e);
                self.event_bus.emit(ClientEvent::ClipSyncFailed {
                    message: e.to_string(),
                });
            }
        }

        drop(guard);
        result
    }

    /// User-triggered fetch. Returns whether the list was replaced.
    pub async fn refresh(&self) -> bool {
        self.fetch().await.is_ok()
    }

    /// Build the polling loop: one fetch right away, then one per interval.
    ///
    /// The caller spawns the returned future. Dropping or cancelling the
    /// [`PollHandle`] stops the loop before its next step.
    pub fn start_polling(&self) -> (LocalBoxFuture<'static, ()>, PollHandle) {
        let sync = self.clone();
        let interval = self.poll_interval_ms;

        let poll_loop = async move {
            log::info!("Clip polling started, every {}ms", interval);
            loop {
                let _ = sync.fetch().await;
                sync.timer.sleep(interval).await;
            }
        };

        let (poll_loop, abort) = abortable(poll_loop);
        let task = async move {
            if poll_loop.await.is_err() {
                log::debug!("Clip polling loop exited");
            }
        }
        .boxed_local();

        (task, PollHandle { abort })
    }

    pub fn clips(&self) -> Vec<Clip> {
        self.state.borrow().clips.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn state(&self) -> SyncState {
        self.state.borrow().clone()
    }
}

/// Owner's release for a polling loop. Cancels exactly once, on
/// [`PollHandle::cancel`] or on drop.
pub struct PollHandle {
    abort: AbortHandle,
}

impl PollHandle {
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.abort.abort();
        log::info!("Clip polling cancelled");
    }
}

/// Holds one share of the `loading` flag. Released on drop, so a fetch
/// that is aborted mid-flight still clears it.
struct LoadingGuard {
    state: Rc<RefCell<SyncState>>,
    in_flight: Rc<Cell<usize>>,
}

impl LoadingGuard {
    fn begin(state: Rc<RefCell<SyncState>>, in_flight: Rc<Cell<usize>>) -> Self {
        in_flight.set(in_flight.get() + 1);
        state.borrow_mut().loading = true;
        Self { state, in_flight }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        self.state.borrow_mut().loading = remaining > 0;
    }
}
