//! Rustack IAM decoder - turns captured IAM responses into JSON.
//!
//! Reads a `ListOrganizationsFeatures` response body from a file (or stdin),
//! decodes it with `rustack-iam-xml`, and prints the result as JSON on stdout.
//! Error responses are reported on stderr with a non-zero exit status.
//!
//! # Usage
//!
//! ```text
//! HTTP_STATUS=200 rustack-iam-decode response.xml
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `HTTP_STATUS` | `200` | Status code the response arrived with |
//! | `REQUEST_ID` | *(unset)* | Captured `x-amzn-RequestId` header |
//! | `PRETTY_JSON` | `true` | Pretty-print the JSON output |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use rustack_iam_model::ListOrganizationsFeaturesResult;
use rustack_iam_xml::{REQUEST_ID_HEADER, from_response};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DecodeConfig;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout carries only the decoded JSON.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Read the response body from `path`, or from stdin when no path is given.
fn read_body(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut body = Vec::new();
            std::io::stdin()
                .read_to_end(&mut body)
                .context("failed to read stdin")?;
            Ok(body)
        }
    }
}

/// Build the response headers the decoder sees.
fn build_headers(config: &DecodeConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    if let Some(request_id) = &config.request_id {
        let value = HeaderValue::from_str(request_id)
            .with_context(|| format!("invalid REQUEST_ID header value: {request_id}"))?;
        headers.insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    Ok(headers)
}

/// Decode `body` and render the result as JSON.
fn decode(config: &DecodeConfig, body: &[u8]) -> Result<String> {
    let status = StatusCode::from_u16(config.http_status)
        .with_context(|| format!("invalid HTTP status: {}", config.http_status))?;
    let headers = build_headers(config)?;

    let output: ListOrganizationsFeaturesResult = from_response(status, headers, body)
        .context("failed to decode ListOrganizationsFeatures response")?;
    info!(
        request_id = output.response_metadata.request_id(),
        features = output.enabled_features.len(),
        "decoded response"
    );

    let json = if config.pretty_json {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

fn main() -> Result<()> {
    let config = DecodeConfig::from_env()?;
    init_tracing(&config.log_level)?;

    let path = std::env::args_os().nth(1);
    let body = read_body(path.as_deref().map(Path::new))?;
    info!(bytes = body.len(), status = config.http_status, "decoding response body");

    let json = decode(&config, &body)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &[u8] = br#"<ListOrganizationsFeaturesResponse xmlns="https://iam.amazonaws.com/doc/2010-05-08/">
  <ListOrganizationsFeaturesResult>
    <OrganizationId>o-a1b2c3d4e5</OrganizationId>
    <EnabledFeatures><member>RootSessions</member></EnabledFeatures>
  </ListOrganizationsFeaturesResult>
</ListOrganizationsFeaturesResponse>"#;

    fn compact_config() -> DecodeConfig {
        DecodeConfig {
            pretty_json: false,
            ..DecodeConfig::default()
        }
    }

    #[test]
    fn test_should_render_decoded_result_as_json() {
        let json = decode(&compact_config(), BODY).expect("decode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["organizationId"], "o-a1b2c3d4e5");
        assert_eq!(value["enabledFeatures"], serde_json::json!(["RootSessions"]));
    }

    #[test]
    fn test_should_attach_configured_request_id() {
        let config = DecodeConfig {
            request_id: Some("cli-req-1".to_owned()),
            ..compact_config()
        };
        let json = decode(&config, BODY).expect("decode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(value["responseMetadata"]["requestId"], "cli-req-1");
    }

    #[test]
    fn test_should_fail_on_error_response() {
        let config = DecodeConfig {
            http_status: 404,
            ..compact_config()
        };
        let body = b"<ErrorResponse><Error><Type>Sender</Type><Code>NoSuchEntity</Code><Message>missing</Message></Error></ErrorResponse>";
        let err = decode(&config, body).expect_err("error response");
        assert!(format!("{err:#}").contains("NoSuchEntity"));
    }

    #[test]
    fn test_should_reject_out_of_range_status() {
        let config = DecodeConfig {
            http_status: 42,
            ..compact_config()
        };
        assert!(decode(&config, BODY).is_err());
    }
}
