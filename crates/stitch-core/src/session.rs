//! Assistant session: the conversation state machine.
//!
//! Two states, `Idle` and `Sending`. A send appends the user turn before any
//! network I/O, issues one request carrying the whole history, then appends
//! either the reply or a synthesized error turn and returns to `Idle`.
//! Only one send is in flight at a time; others are rejected.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::Serialize;
use stitch_types::{
    config::ClientConfig,
    event::ClientEvent,
    message::{Message, Role},
};
use crate::credentials::CredentialStore;
use crate::event_bus::EventBus;
use crate::ports::{BackendPort, ChatRequest, TimerPort};
use crate::timeout::with_timeout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Idle,
    Sending,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    pub messages: Vec<Message>,
    pub status: SessionStatus,
}

impl SessionState {
    pub fn pending(&self) -> bool {
        self.status == SessionStatus::Sending
    }
}

/// How a call to [`AssistantSession::send`] resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input or a send already in flight; nothing changed
    Rejected,
    /// The assistant's reply was appended
    Replied,
    /// An error turn was appended
    Failed { description: String },
}

/// Clone-cheap handle; clones share one transcript.
#[derive(Clone)]
pub struct AssistantSession {
    state: Rc<RefCell<SessionState>>,
    backend: Rc<dyn BackendPort>,
    timer: Rc<dyn TimerPort>,
    credentials: Rc<CredentialStore>,
    event_bus: EventBus,
    timeout_ms: u64,
}

impl AssistantSession {
    pub fn new(
        config: &ClientConfig,
        backend: Rc<dyn BackendPort>,
        timer: Rc<dyn TimerPort>,
        credentials: Rc<CredentialStore>,
        event_bus: EventBus,
    ) -> Self {
        let state = SessionState {
            messages: vec![Message::assistant(&config.welcome_message)],
            status: SessionStatus::Idle,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            backend,
            timer,
            credentials,
            event_bus,
            timeout_ms: config.backend.request_timeout_ms,
        }
    }

    /// Submit a user turn.
    ///
    /// The gate check, the user-turn append and the switch to `Sending`
    /// happen before this returns, so state read right after the call
    /// already shows the turn. The returned future carries the request and
    /// must be driven to completion (`spawn_local` in the browser).
    pub fn send(&self, text: &str) -> LocalBoxFuture<'static, SendOutcome> {
        match self.begin(text) {
            Some((request, server_secret)) => {
                self.clone().complete(request, server_secret).boxed_local()
            }
            None => future::ready(SendOutcome::Rejected).boxed_local(),
        }
    }

    fn begin(&self, text: &str) -> Option<(ChatRequest, String)> {
        let (request, server_secret) = {
            let mut state = self.state.borrow_mut();
            if state.pending() {
                log::debug!("Send rejected: a request is already in flight");
                return None;
            }
            if text.trim().is_empty() {
                return None;
            }

            state.messages.push(Message::user(text));
            state.status = SessionStatus::Sending;

            let api_keys = self.credentials.current();
            let server_secret = api_keys.effective_server_secret().to_string();
            let request = ChatRequest {
                messages: state.messages.clone(),
                api_keys,
            };
            (request, server_secret)
        };

        self.event_bus.emit(ClientEvent::SendStarted);
        self.event_bus.emit(ClientEvent::MessageAppended {
            role: Role::User,
            index: request.messages.len() - 1,
        });
        Some((request, server_secret))
    }

    async fn complete(self, request: ChatRequest, server_secret: String) -> SendOutcome {
        let result = with_timeout(
            self.timer.as_ref(),
            self.timeout_ms,
            self.backend.chat(request, &server_secret),
        )
        .await;

        let (reply, outcome) = match result {
            Ok(reply) => (Message::assistant(reply.content), SendOutcome::Replied),
            Err(e) => {
                log::warn!("Chat request failed: {}", e);
                let description = e.description();
                (Message::error(&description), SendOutcome::Failed { description })
            }
        };

        let index = {
            let mut state = self.state.borrow_mut();
            state.messages.push(reply);
            state.status = SessionStatus::Idle;
            state.messages.len() - 1
        };

        self.event_bus.emit(ClientEvent::MessageAppended {
            role: Role::Assistant,
            index,
        });
        self.event_bus.emit(ClientEvent::SendFinished {
            success: outcome == SendOutcome::Replied,
        });
        outcome
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages.clone()
    }

    /// The busy flag that gates input
    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }
}
