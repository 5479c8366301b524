//! Client configuration, read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the assistant API (the client posts to `{api_url}/chat`).
    pub api_url: String,
    /// Optional API key, sent as the `x-api-key` header.
    pub api_key: Option<SecretString>,
    /// Where the session token is persisted across runs.
    pub session_path: PathBuf,
    /// Delay between bubbles of a multi-section reply.
    pub bubble_delay: Duration,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Directory for the log file.
    pub log_dir: PathBuf,
}

impl ClientConfig {
    /// Build the configuration from `CLANCY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = var("CLANCY_API_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingRequired {
                key: "CLANCY_API_URL".into(),
                hint: "Set it to the assistant's base URL, e.g. \
                       export CLANCY_API_URL=https://example.execute-api.us-east-1.amazonaws.com/prod"
                    .into(),
            })?;

        let api_key = var("CLANCY_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .map(SecretString::from);

        let session_path = var("CLANCY_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = var("HOME").unwrap_or_else(|| ".".to_string());
                PathBuf::from(home).join(".clancy/session.json")
            });

        let bubble_delay =
            Duration::from_millis(parse_var(&var, "CLANCY_BUBBLE_DELAY_MS", 600)?);
        let request_timeout =
            Duration::from_secs(parse_var(&var, "CLANCY_TIMEOUT_SECS", 30)?);

        let log_dir = var("CLANCY_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./logs"));

        Ok(Self {
            api_url,
            api_key,
            session_path,
            bubble_delay,
            request_timeout,
            log_dir,
        })
    }
}

fn parse_var(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> Result<u64, ConfigError> {
    match var(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.into(),
            message: format!("expected a non-negative integer, got {raw:?}"),
        }),
    }
}
