use serde::{Deserialize, Serialize};
use crate::message::Role;

/// Events emitted by the session and the library sync.
/// The presentation shell drains these to know when to re-render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    /// A user turn was accepted and the request is going out
    SendStarted,

    /// A turn was appended to the transcript
    MessageAppended { role: Role, index: usize },

    /// The outstanding send resolved
    SendFinished { success: bool },

    /// A clip fetch started
    ClipsLoading,

    /// The clip list was replaced
    ClipsUpdated { count: usize },

    /// A clip fetch failed; state was left as is
    ClipSyncFailed { message: String },

    /// Credentials were replaced
    CredentialsSaved { persisted: bool },
}

impl ClientEvent {
    /// Clip-sync status events. Only the newest of each kind is meaningful.
    pub fn is_sync_status(&self) -> bool {
        matches!(
            self,
            ClientEvent::ClipsLoading
                | ClientEvent::ClipsUpdated { .. }
                | ClientEvent::ClipSyncFailed { .. }
        )
    }
}
