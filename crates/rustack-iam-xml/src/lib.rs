//! IAM XML serialization/deserialization for `Rustack`.
//!
//! This crate provides the XML layer for the IAM query protocol, handling
//! conversion between IAM model types and the XML wire format.
//!
//! # Key components
//!
//! - [`XmlDocument`] / [`XmlNode`], a small element tree built with `quick-xml`
//! - [`AwsResult`], the HTTP envelope (status + headers) around a payload
//! - [`IamDeserialize`] trait and [`from_response`] for decoding response bodies
//! - [`IamSerialize`] trait and [`to_query_response_xml`] for producing them
//! - [`error_to_xml`] for formatting IAM error responses
//!
//! # IAM XML conventions
//!
//! - Namespace: `https://iam.amazonaws.com/doc/2010-05-08/`
//! - Output is wrapped as `<{Op}Response><{Op}Result>...</{Op}Result><ResponseMetadata>`
//! - List members are `<member>` elements
//! - Errors are `<ErrorResponse><Error>...</Error><RequestId>` documents

pub mod deserialize;
pub mod document;
pub mod envelope;
pub mod error;
pub mod serialize;

pub use deserialize::{
    IamDeserialize, from_response, parse_error_response, parse_list_organizations_features,
    parse_response_metadata,
};
pub use document::{MAX_DEPTH, XmlDocument, XmlNode};
pub use envelope::{AwsResult, REQUEST_ID_HEADER};
pub use error::{IamResponseError, XmlError, error_to_xml};
pub use serialize::{IAM_NAMESPACE, IamSerialize, to_query_response_xml};
