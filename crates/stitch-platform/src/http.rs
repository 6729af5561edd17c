//! HTTP adapter for the Stitch backend.
//!
//! Speaks `POST /api/chat` and `GET /api/clips`.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

use stitch_core::ports::*;
use stitch_types::{
    Result, StitchError,
    clip::Clip,
    config::BackendConfig,
};

pub const SECRET_HEADER: &str = "X-Stitch-Secret";

pub struct HttpBackend {
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn chat(&self, req: ChatRequest, server_secret: &str) -> Result<ChatReply> {
        let url = self.config.endpoint("/api/chat");

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .header(SECRET_HEADER, server_secret)
            .json(&req)
            .map_err(|e| StitchError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| StitchError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let detail = match response.text().await {
                Ok(body) => parse_error_detail(&body),
                Err(_) => None,
            };
            return Err(StitchError::Backend { status, detail });
        }

        let body = response
            .text()
            .await
            .map_err(|e| StitchError::Network(e.to_string()))?;
        parse_chat_reply(&body)
    }

    async fn list_clips(&self) -> Result<Vec<Clip>> {
        let url = self.config.endpoint("/api/clips");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| StitchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(StitchError::Backend {
                status: response.status(),
                detail: None,
            });
        }

        response
            .json::<Vec<Clip>>()
            .await
            .map_err(|e| StitchError::MalformedResponse(e.to_string()))
    }
}

// ─── Wire helpers ────────────────────────────────────────────

#[derive(Deserialize)]
struct ApiReply {
    #[serde(default)]
    content: Option<String>,
}

/// Parse a 2xx chat body. A reply without string `content` (for example a
/// bare tool-call message) is malformed.
pub fn parse_chat_reply(body: &str) -> Result<ChatReply> {
    let reply: ApiReply = serde_json::from_str(body)
        .map_err(|e| StitchError::MalformedResponse(e.to_string()))?;
    reply
        .content
        .map(|content| ChatReply { content })
        .ok_or_else(|| StitchError::MalformedResponse("reply has no content".to_string()))
}

/// Pull `detail` out of an error body. Non-string details (validation
/// error lists) are rendered as JSON text.
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
