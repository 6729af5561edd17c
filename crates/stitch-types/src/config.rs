use serde::{Deserialize, Serialize};
use crate::{Result, StitchError};

/// Top-level client configuration. Every section has a default, so the shell
/// may pass a partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    pub sync: SyncConfig,
    pub welcome_message: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            sync: SyncConfig::default(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(StitchError::Config("backend.base_url is empty".to_string()));
        }
        if self.backend.request_timeout_ms == 0 {
            return Err(StitchError::Config(
                "backend.request_timeout_ms must be positive".to_string(),
            ));
        }
        if self.sync.poll_interval_ms == 0 {
            return Err(StitchError::Config(
                "sync.poll_interval_ms must be positive".to_string(),
            ));
        }
        if self.sync.request_timeout_ms == 0 {
            return Err(StitchError::Config(
                "sync.request_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    /// Upper bound for one chat request, including any server-side tool calls
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 120_000,
        }
    }
}

impl BackendConfig {
    /// Join an `/api/...` path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub poll_interval_ms: u64,
    pub request_timeout_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 5_000,
            request_timeout_ms: 10_000,
        }
    }
}

const DEFAULT_WELCOME_MESSAGE: &str =
    "Hello! I am your AI Video Copilot. How can I help you edit today?";
