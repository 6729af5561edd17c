use thiserror::Error;

/// Fallback when a non-2xx chat response carries no usable `detail`
pub const GENERIC_SEND_FAILURE: &str = "Failed to send message";

const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StitchError {
    #[error("Backend returned HTTP {status}: {}", .detail.as_deref().unwrap_or(GENERIC_SEND_FAILURE))]
    Backend { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StitchError {
    /// Text shown after "Error: " in the transcript. Backend detail wins,
    /// then the transport description, then a generic fallback.
    pub fn description(&self) -> String {
        let text = match self {
            StitchError::Backend { detail, .. } => {
                return detail
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or(GENERIC_SEND_FAILURE)
                    .to_string();
            }
            StitchError::Network(msg)
            | StitchError::MalformedResponse(msg)
            | StitchError::Storage(msg)
            | StitchError::Serialization(msg)
            | StitchError::Config(msg) => msg.clone(),
            StitchError::Timeout(_) => self.to_string(),
        };
        if text.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            text
        }
    }
}

impl From<serde_json::Error> for StitchError {
    fn from(e: serde_json::Error) -> Self {
        StitchError::Serialization(e.to_string())
    }
}
