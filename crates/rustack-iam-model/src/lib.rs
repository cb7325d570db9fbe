//! IAM model types for Rustack.
//!
//! Plain data holders for the IAM query-protocol responses that Rustack
//! decodes. Wire-format handling lives in `rustack-iam-xml`.

pub mod error;
pub mod operations;
pub mod output;
pub mod types;

pub use error::{IamErrorType, IamServiceError};
pub use operations::IamOperation;
pub use output::{ListOrganizationsFeaturesResult, ResponseMetadata};
pub use types::FeatureType;
