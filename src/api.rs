//! HTTP client for the assistant's `/chat` endpoint.
//!
//! One operation: POST `{message, session_id}`, get `{response, session_id}`
//! back. Any transport failure or non-2xx status is surfaced as a single
//! generic error; the caller shows one error bubble and moves on.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Message that asks the server to open a fresh session and return the
/// greeting.
pub const INIT_MESSAGE: &str = "INIT";

/// Wire request for `/chat`.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    session_id: Option<&'a str>,
}

/// A reply from the assistant.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Reply text, possibly carrying tags, section breaks, and markup.
    pub response: String,
    /// Session token. Some server branches omit it.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatReply {
    /// Token to carry forward: the reply's, or the current one when the
    /// reply omits it.
    pub fn merge_session_id(&self, current: Option<&str>) -> Option<String> {
        self.session_id
            .clone()
            .or_else(|| current.map(String::from))
    }
}

/// Client for the assistant API.
pub struct ChatApi {
    base_url: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl ChatApi {
    /// Build the client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::RequestFailed {
                url: config.api_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }

    /// One round trip to `/chat`.
    pub async fn send(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatReply, ApiError> {
        let url = self.chat_url();
        let body = ChatRequest {
            message,
            session_id,
        };

        tracing::debug!(session_id = ?session_id, "Sending chat message");

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key.expose_secret());
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status().as_u16(),
            });
        }

        resp.json::<ChatReply>()
            .await
            .map_err(|e| ApiError::InvalidResponse {
                reason: e.to_string(),
            })
    }

    /// Bootstrap a fresh conversation: send `INIT` with no session token.
    pub async fn init(&self) -> Result<ChatReply, ApiError> {
        self.send(INIT_MESSAGE, None).await
    }
}

// ── Tests ───────────────────────────────────────────────────────────
