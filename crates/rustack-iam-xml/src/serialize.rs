//! IAM XML serialization: converting Rust types to query-protocol XML.
//!
//! This module provides the [`IamSerialize`] trait and the implementations for
//! IAM output types. Responses follow the AWS query protocol layout:
//!
//! - Namespace: `https://iam.amazonaws.com/doc/2010-05-08/`
//! - Root element `{Operation}Response` containing `{Operation}Result` and `ResponseMetadata`
//! - Lists as repeated `<member>` elements
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use rustack_iam_model::{FeatureType, IamOperation, ListOrganizationsFeaturesResult};

use crate::error::XmlError;

/// The IAM XML namespace.
pub const IAM_NAMESPACE: &str = "https://iam.amazonaws.com/doc/2010-05-08/";

/// Trait for serializing IAM types to XML.
///
/// Implementors write their content as child elements inside the current XML context.
/// The wrapper elements and namespace are handled by [`to_query_response_xml`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait IamSerialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Serialize an operation output as a complete query-protocol response document.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_query_response_xml<T: IamSerialize>(
    operation: IamOperation,
    value: &T,
    request_id: &str,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element(operation.response_element())
        .with_attribute(("xmlns", IAM_NAMESPACE))
        .write_inner_content(|w| {
            w.create_element(operation.result_element())
                .write_inner_content(|w| value.serialize_xml(w))?;
            w.create_element("ResponseMetadata").write_inner_content(|w| {
                write_text_element(w, "RequestId", request_id)
            })?;
            Ok(())
        })?;

    Ok(buf)
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: Option<&str>,
) -> io::Result<()> {
    match text {
        Some(t) => write_text_element(writer, name, t),
        None => Ok(()),
    }
}

fn write_member_list<'a, W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    members: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    writer.create_element(name).write_inner_content(|w| {
        for member in members {
            write_text_element(w, "member", member)?;
        }
        Ok(())
    })?;
    Ok(())
}

impl IamSerialize for ListOrganizationsFeaturesResult {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "OrganizationId", self.organization_id.as_deref())?;
        write_member_list(
            writer,
            "EnabledFeatures",
            self.enabled_features.iter().map(FeatureType::as_str),
        )
    }
}
