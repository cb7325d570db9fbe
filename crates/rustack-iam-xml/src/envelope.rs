//! The HTTP envelope around a decoded response payload.

use http::{HeaderMap, StatusCode};

/// Header carrying the request id on IAM responses.
pub const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// A response payload together with the HTTP status and headers it arrived with.
#[derive(Debug, Clone)]
pub struct AwsResult<T> {
    payload: T,
    headers: HeaderMap,
    status: StatusCode,
}

impl<T> AwsResult<T> {
    /// Wrap a payload with its response status and headers.
    #[must_use]
    pub fn new(payload: T, headers: HeaderMap, status: StatusCode) -> Self {
        Self {
            payload,
            headers,
            status,
        }
    }

    /// Wrap a payload as a `200 OK` response with no headers.
    #[must_use]
    pub fn from_payload(payload: T) -> Self {
        Self::new(payload, HeaderMap::new(), StatusCode::OK)
    }

    /// The wrapped payload.
    #[must_use]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// HTTP status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The `x-amzn-RequestId` header value, if present and valid ASCII.
    #[must_use]
    pub fn request_id_header(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn test_should_read_request_id_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_static("c5a1f3e0-0000-4000-8000-000000000001"),
        );
        let result = AwsResult::new((), headers, StatusCode::OK);
        assert_eq!(
            result.request_id_header(),
            Some("c5a1f3e0-0000-4000-8000-000000000001")
        );
    }

    #[test]
    fn test_should_ignore_empty_request_id_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderValue::from_static(""),
        );
        let result = AwsResult::new((), headers, StatusCode::OK);
        assert!(result.request_id_header().is_none());
    }

    #[test]
    fn test_should_default_to_ok_status() {
        let result = AwsResult::from_payload("body");
        assert_eq!(result.status(), StatusCode::OK);
        assert!(result.request_id_header().is_none());
        assert_eq!(*result.payload(), "body");
    }
}
