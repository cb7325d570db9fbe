//! IAM XML deserialization: decoding query-protocol responses into Rust types.
//!
//! This module provides the [`IamDeserialize`] trait and implementations for
//! IAM output types. Decoding walks an [`XmlDocument`] by element name; any
//! element the schema names but the document lacks is left at its default,
//! so a sparse response never fails to decode.

use http::{HeaderMap, StatusCode};
use rustack_iam_model::{
    FeatureType, IamErrorType, IamOperation, IamServiceError, ListOrganizationsFeaturesResult,
    ResponseMetadata,
};
use tracing::debug;

use crate::document::{XmlDocument, XmlNode};
use crate::envelope::AwsResult;
use crate::error::IamResponseError;

/// Trait for decoding IAM outputs from a response document.
pub trait IamDeserialize: Sized {
    /// Build a value from a parsed response document and its HTTP envelope.
    fn from_result(result: &AwsResult<XmlDocument>) -> Self;

    /// Replace `self` with a value decoded from `result`.
    ///
    /// Nothing from the previous contents is kept.
    fn assign(&mut self, result: &AwsResult<XmlDocument>) {
        *self = Self::from_result(result);
    }
}

/// Decode a complete HTTP response body.
///
/// An `<ErrorResponse>` document is returned as [`IamResponseError::Service`],
/// whatever the status. A non-success status without one is
/// [`IamResponseError::UnexpectedStatus`].
///
/// # Errors
///
/// Returns `IamResponseError` if the body is not well-formed XML or the
/// response reports a failure.
pub fn from_response<T: IamDeserialize>(
    status: StatusCode,
    headers: HeaderMap,
    body: &[u8],
) -> Result<T, IamResponseError> {
    let document = XmlDocument::parse(body)?;
    let result = AwsResult::new(document, headers, status);

    if let Some(mut err) = parse_error_response(result.payload(), result.status()) {
        if err.request_id.is_none() {
            if let Some(request_id) = result.request_id_header() {
                err = err.with_request_id(request_id);
            }
        }
        debug!(
            code = %err.code,
            request_id = err.request_id.as_deref().unwrap_or_default(),
            status = %result.status(),
            "IAM returned an error response"
        );
        return Err(err.into());
    }
    if !result.status().is_success() {
        return Err(IamResponseError::UnexpectedStatus(result.status()));
    }

    Ok(T::from_result(&result))
}

/// Decode a `ListOrganizationsFeatures` response document.
///
/// The result element is the root itself when it is named
/// `ListOrganizationsFeaturesResult`, otherwise the root's first child of that
/// name. `ResponseMetadata` is always read from the root.
#[must_use]
pub fn parse_list_organizations_features(document: &XmlDocument) -> ListOrganizationsFeaturesResult {
    let mut output = ListOrganizationsFeaturesResult::default();
    let Some(root) = document.root() else {
        return output;
    };

    if let Some(node) = result_node(root, IamOperation::ListOrganizationsFeatures) {
        if let Some(id) = node.first_child("OrganizationId") {
            output.organization_id = Some(id.text().to_owned());
        }
        if let Some(features) = node.first_child("EnabledFeatures") {
            output.enabled_features = features
                .children_named("member")
                .map(|member| member.text().trim())
                .filter(|name| !name.is_empty())
                .map(FeatureType::from)
                .inspect(|feature| {
                    if !feature.is_known() {
                        debug!(feature = feature.as_str(), "unrecognized feature type");
                    }
                })
                .collect();
        }
    }

    if let Some(metadata) = root.first_child("ResponseMetadata") {
        output.response_metadata = parse_response_metadata(metadata);
    }
    debug!(
        request_id = output.response_metadata.request_id(),
        "decoded ListOrganizationsFeatures response"
    );

    output
}

/// Decode a `<ResponseMetadata>` element.
///
/// `RequestId` lands in [`ResponseMetadata::request_id`]; every other leaf
/// child is kept in [`ResponseMetadata::extra`]. Values are taken as written.
/// When an element name repeats, the first occurrence wins.
#[must_use]
pub fn parse_response_metadata(node: &XmlNode) -> ResponseMetadata {
    let mut metadata = ResponseMetadata {
        request_id: node.first_child("RequestId").map(|n| n.text().to_owned()),
        ..ResponseMetadata::default()
    };
    for child in node.children().iter().filter(|c| c.is_leaf()) {
        if child.name() != "RequestId" {
            metadata
                .extra
                .entry(child.name().to_owned())
                .or_insert_with(|| child.text().to_owned());
        }
    }
    metadata
}

/// Decode an IAM error document.
///
/// Accepts `<ErrorResponse><Error>...</Error><RequestId/></ErrorResponse>` as
/// well as a bare `<Error>` root. Returns `None` for any other document.
#[must_use]
pub fn parse_error_response(document: &XmlDocument, status: StatusCode) -> Option<IamServiceError> {
    let root = document.root()?;
    let error = match root.name() {
        "ErrorResponse" => root.first_child("Error")?,
        "Error" => root,
        _ => return None,
    };

    let text_of = |node: &XmlNode, name: &str| {
        node.first_child(name)
            .map(|n| n.text().trim().to_owned())
            .filter(|t| !t.is_empty())
    };

    Some(IamServiceError {
        error_type: text_of(error, "Type").map_or(IamErrorType::Unknown, |t| {
            IamErrorType::from(t.as_str())
        }),
        code: text_of(error, "Code").unwrap_or_default(),
        message: text_of(error, "Message").unwrap_or_default(),
        request_id: text_of(root, "RequestId").or_else(|| text_of(error, "RequestId")),
        status_code: status,
    })
}

fn result_node(root: &XmlNode, operation: IamOperation) -> Option<&XmlNode> {
    let element = operation.result_element();
    if root.name() == element {
        Some(root)
    } else {
        root.first_child(element)
    }
}

impl IamDeserialize for ListOrganizationsFeaturesResult {
    fn from_result(result: &AwsResult<XmlDocument>) -> Self {
        let mut output = parse_list_organizations_features(result.payload());
        if output.response_metadata.request_id.is_none() {
            if let Some(request_id) = result.request_id_header() {
                debug!(request_id, "request id taken from response header");
                output.response_metadata.request_id = Some(request_id.to_owned());
            }
        }
        output
    }
}
