//! IAM operation outputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::FeatureType;

/// Envelope information attached to every IAM query-protocol response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    /// The `RequestId` echoed by the service.
    pub request_id: Option<String>,
    /// Any other leaf entries of `<ResponseMetadata>`, keyed by element name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl ResponseMetadata {
    /// Metadata carrying only a request id.
    #[must_use]
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            extra: BTreeMap::new(),
        }
    }

    /// The request id, or an empty string when the response carried none.
    #[must_use]
    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or_default()
    }
}

/// IAM ListOrganizationsFeaturesResult.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationsFeaturesResult {
    /// Unique identifier of the organization.
    pub organization_id: Option<String>,
    /// Enabled centralized root access features, in response order.
    pub enabled_features: Vec<FeatureType>,
    /// Envelope metadata, read from the document root.
    pub response_metadata: ResponseMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_to_empty_result() {
        let result = ListOrganizationsFeaturesResult::default();
        assert!(result.organization_id.is_none());
        assert!(result.enabled_features.is_empty());
        assert_eq!(result.response_metadata.request_id(), "");
    }

    #[test]
    fn test_should_serialize_result_as_camel_case_json() {
        let result = ListOrganizationsFeaturesResult {
            organization_id: Some("o-a1b2c3d4e5".to_owned()),
            enabled_features: vec![FeatureType::RootSessions],
            response_metadata: ResponseMetadata::with_request_id("req-1"),
        };
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["organizationId"], "o-a1b2c3d4e5");
        assert_eq!(value["enabledFeatures"][0], "RootSessions");
        assert_eq!(value["responseMetadata"]["requestId"], "req-1");
        assert!(value["responseMetadata"].get("extra").is_none());
    }
}
