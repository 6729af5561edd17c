//! Event queue between the core and the JS shell.
//!
//! Single-threaded (WASM), shared through `Rc<RefCell<_>>`. The shell may
//! render from the state getters and drain rarely or never, while the poll
//! loop emits on every tick, so the queue is bounded two ways:
//!
//! - a clip-sync event replaces any queued event of the same variant, so
//!   polling leaves at most one of each behind;
//! - past [`MAX_PENDING_EVENTS`] the oldest entry is dropped.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::mem;
use std::rc::Rc;
use stitch_types::event::ClientEvent;

/// Upper bound on undrained events
pub const MAX_PENDING_EVENTS: usize = 256;

/// Shared event queue, clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<ClientEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: ClientEvent) {
        let mut queue = self.queue.borrow_mut();
        if event.is_sync_status() {
            let kind = mem::discriminant(&event);
            queue.retain(|queued| mem::discriminant(queued) != kind);
        }
        if queue.len() >= MAX_PENDING_EVENTS {
            if let Some(dropped) = queue.pop_front() {
                log::debug!("Event queue full, dropping {:?}", dropped);
            }
        }
        queue.push_back(event);
    }

    /// All pending events, oldest first.
    pub fn drain(&self) -> Vec<ClientEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
