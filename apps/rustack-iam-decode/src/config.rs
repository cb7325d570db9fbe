//! Configuration for the decoder, driven by environment variables.

use anyhow::{Context, Result};

/// Decoder configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Whether to pretty-print the JSON output.
    pub pretty_json: bool,
    /// HTTP status the captured response arrived with.
    pub http_status: u16,
    /// Value of the `x-amzn-RequestId` header, if it was captured.
    pub request_id: Option<String>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            pretty_json: true,
            http_status: 200,
            request_id: None,
        }
    }
}

impl DecodeConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if `HTTP_STATUS` is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns an error if `HTTP_STATUS` is not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("PRETTY_JSON") {
            config.pretty_json = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup("HTTP_STATUS") {
            config.http_status = v
                .trim()
                .parse()
                .with_context(|| format!("invalid HTTP_STATUS: {v}"))?;
        }
        if let Some(v) = lookup("REQUEST_ID") {
            config.request_id = Some(v).filter(|id| !id.is_empty());
        }

        Ok(config)
    }
}
