//! IAM error XML formatting and error types.
//!
//! This module provides the `XmlError` type for XML serialization/deserialization
//! errors, the `IamResponseError` type returned when decoding a full response,
//! and the `error_to_xml` function for formatting IAM error responses.

use std::io;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use rustack_iam_model::IamServiceError;

use crate::serialize::IAM_NAMESPACE;

/// Errors that can occur during IAM XML serialization or deserialization.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// Element names or text were not valid UTF-8.
    #[error("XML encoding error: {0}")]
    Encoding(String),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}

/// Errors returned when decoding a complete IAM HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum IamResponseError {
    /// The body was not well-formed XML.
    #[error(transparent)]
    Xml(#[from] XmlError),

    /// The service answered with an `<ErrorResponse>` document.
    #[error(transparent)]
    Service(#[from] IamServiceError),

    /// A non-success status arrived without a decodable error document.
    #[error("unexpected HTTP status {0} without an error document")]
    UnexpectedStatus(http::StatusCode),
}

/// Format an IAM error as XML.
///
/// # Example output
///
/// ```xml
/// <?xml version="1.0" encoding="UTF-8"?>
/// <ErrorResponse xmlns="https://iam.amazonaws.com/doc/2010-05-08/">
///   <Error>
///     <Type>Sender</Type>
///     <Code>NoSuchEntity</Code>
///     <Message>The organization was not found.</Message>
///   </Error>
///   <RequestId>4a5b...</RequestId>
/// </ErrorResponse>
/// ```
#[must_use]
pub fn error_to_xml(err: &IamServiceError, request_id: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);
    if let Err(e) = write_error_xml(&mut buf, err, request_id) {
        tracing::error!(error = %e, "failed to serialize IAM error XML");
        buf.clear();
    }
    buf
}

fn write_error_xml(buf: &mut Vec<u8>, err: &IamServiceError, request_id: &str) -> io::Result<()> {
    let mut writer = Writer::new(buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element("ErrorResponse")
        .with_attribute(("xmlns", IAM_NAMESPACE))
        .write_inner_content(|w| {
            w.create_element("Error").write_inner_content(|w| {
                w.create_element("Type")
                    .write_text_content(BytesText::new(err.error_type.as_str()))?;
                w.create_element("Code")
                    .write_text_content(BytesText::new(&err.code))?;
                w.create_element("Message")
                    .write_text_content(BytesText::new(&err.message))?;
                Ok(())
            })?;
            w.create_element("RequestId")
                .write_text_content(BytesText::new(request_id))?;
            Ok(())
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_format_error_response() {
        let err = IamServiceError::new("NoSuchEntity", "The organization was not found.");
        let xml = error_to_xml(&err, "req-0001");
        let xml_str = std::str::from_utf8(&xml).expect("valid UTF-8");

        assert!(xml_str.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml_str.contains(
            "<ErrorResponse xmlns=\"https://iam.amazonaws.com/doc/2010-05-08/\">"
        ));
        assert!(xml_str.contains("<Type>Sender</Type>"));
        assert!(xml_str.contains("<Code>NoSuchEntity</Code>"));
        assert!(xml_str.contains("<RequestId>req-0001</RequestId>"));
    }

    #[test]
    fn test_should_escape_special_characters() {
        let err = IamServiceError::new("InvalidInput", "Value must be < 64 & > 0");
        let xml = error_to_xml(&err, "req-0002");
        let xml_str = std::str::from_utf8(&xml).expect("valid UTF-8");

        assert!(xml_str.contains("Value must be &lt; 64 &amp; &gt; 0"));
    }

    #[test]
    fn test_should_wrap_service_error_transparently() {
        let err: IamResponseError = IamServiceError::new("ServiceFailure", "boom").into();
        assert_eq!(err.to_string(), "IamError(ServiceFailure): boom");
    }
}
