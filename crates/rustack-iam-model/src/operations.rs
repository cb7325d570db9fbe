//! IAM operation identifiers.

/// IAM operations with a typed response decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IamOperation {
    /// The ListOrganizationsFeatures operation.
    ListOrganizationsFeatures,
}

impl IamOperation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListOrganizationsFeatures => "ListOrganizationsFeatures",
        }
    }

    /// Name of the element wrapping the operation output.
    #[must_use]
    pub fn result_element(&self) -> &'static str {
        match self {
            Self::ListOrganizationsFeatures => "ListOrganizationsFeaturesResult",
        }
    }

    /// Name of the document root element of a successful response.
    #[must_use]
    pub fn response_element(&self) -> &'static str {
        match self {
            Self::ListOrganizationsFeatures => "ListOrganizationsFeaturesResponse",
        }
    }
}

impl std::fmt::Display for IamOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_derive_wrapper_element_names() {
        let op = IamOperation::ListOrganizationsFeatures;
        assert_eq!(op.result_element(), "ListOrganizationsFeaturesResult");
        assert_eq!(op.response_element(), "ListOrganizationsFeaturesResponse");
        assert_eq!(op.to_string(), "ListOrganizationsFeatures");
    }
}
