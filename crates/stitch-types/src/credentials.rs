//! Provider credentials as stored under `mcp_api_keys`.

use serde::{Deserialize, Deserializer, Serialize};

/// Storage key for the persisted credential set
pub const CREDENTIALS_STORAGE_KEY: &str = "mcp_api_keys";

/// Sent as `X-Stitch-Secret` when no server secret is configured
pub const DEFAULT_SERVER_SECRET: &str = "stitch-secret";

/// Secrets keyed by provider. Every field defaults to an empty string so
/// records written by older schemas still load; a field holding anything
/// other than a string also reads as empty without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub openai: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub anthropic: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub gemini: String,
    #[serde(rename = "serverSecret", default, deserialize_with = "string_or_empty")]
    pub server_secret: String,
}

impl CredentialSet {
    /// Value for the `X-Stitch-Secret` header.
    pub fn effective_server_secret(&self) -> &str {
        if self.server_secret.is_empty() {
            DEFAULT_SERVER_SECRET
        } else {
            &self.server_secret
        }
    }

    /// The provider the backend will pick: first non-empty key in
    /// openai, anthropic, gemini order.
    pub fn preferred_provider(&self) -> Option<Provider> {
        Provider::all()
            .iter()
            .copied()
            .find(|p| !self.key_for(*p).is_empty())
    }

    pub fn key_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Anthropic => &self.anthropic,
            Provider::Gemini => &self.gemini,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.preferred_provider().is_none() && self.server_secret.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[serde(rename = "openai")]
    OpenAi,
    Anthropic,
    Gemini,
}

impl Provider {
    /// Backend selection order
    pub fn all() -> &'static [Provider] {
        &[Provider::OpenAi, Provider::Anthropic, Provider::Gemini]
    }

    pub fn label(&self) -> &str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Anthropic => "Anthropic",
            Provider::Gemini => "Gemini",
        }
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
