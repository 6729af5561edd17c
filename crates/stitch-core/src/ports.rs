//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `stitch-core` (pure Rust).
//! Implementations live in `stitch-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stitch_types::{
    Result,
    clip::Clip,
    credentials::CredentialSet,
    message::Message,
};

// ─── Backend Port ────────────────────────────────────────────

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub api_keys: CredentialSet,
}

/// Successful chat reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub content: String,
}

#[async_trait(?Send)]
pub trait BackendPort {
    /// Send the full history and credentials; `server_secret` goes into the
    /// `X-Stitch-Secret` header.
    async fn chat(&self, req: ChatRequest, server_secret: &str) -> Result<ChatReply>;

    /// Fetch the whole clip catalog
    async fn list_clips(&self) -> Result<Vec<Clip>>;
}

// ─── Storage Port ────────────────────────────────────────────

/// Synchronous string key-value storage (browser `localStorage` semantics).
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Timer Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait TimerPort {
    /// Resolve after `ms` milliseconds
    async fn sleep(&self, ms: u64);
}
