//! IAM shared enum types.

use serde::{Deserialize, Serialize};

/// IAM FeatureType enum.
///
/// Names outside the known set are preserved in [`FeatureType::Unknown`] so
/// that responses from newer service versions still decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeatureType {
    /// `RootCredentialsManagement`.
    RootCredentialsManagement,
    /// `RootSessions`.
    RootSessions,
    /// A feature name this crate does not know about.
    Unknown(String),
}

impl FeatureType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RootCredentialsManagement => "RootCredentialsManagement",
            Self::RootSessions => "RootSessions",
            Self::Unknown(name) => name,
        }
    }

    /// Whether the name was recognized.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FeatureType {
    fn from(s: &str) -> Self {
        match s {
            "RootCredentialsManagement" => Self::RootCredentialsManagement,
            "RootSessions" => Self::RootSessions,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for FeatureType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<FeatureType> for String {
    fn from(feature: FeatureType) -> Self {
        match feature {
            FeatureType::Unknown(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_known_feature_names() {
        assert_eq!(
            FeatureType::from("RootCredentialsManagement"),
            FeatureType::RootCredentialsManagement
        );
        assert_eq!(FeatureType::from("RootSessions"), FeatureType::RootSessions);
    }

    #[test]
    fn test_should_keep_unrecognized_name() {
        let feature = FeatureType::from("RootPasswordless");
        assert_eq!(feature, FeatureType::Unknown("RootPasswordless".to_owned()));
        assert!(!feature.is_known());
        assert_eq!(feature.as_str(), "RootPasswordless");
    }

    #[test]
    fn test_should_be_case_sensitive() {
        assert!(!FeatureType::from("rootsessions").is_known());
    }

    #[test]
    fn test_should_serialize_as_wire_name() {
        let json = serde_json::to_string(&vec![
            FeatureType::RootSessions,
            FeatureType::Unknown("Other".to_owned()),
        ])
        .expect("serialize");
        assert_eq!(json, r#"["RootSessions","Other"]"#);

        let parsed: Vec<FeatureType> =
            serde_json::from_str(r#"["RootCredentialsManagement"]"#).expect("deserialize");
        assert_eq!(parsed, vec![FeatureType::RootCredentialsManagement]);
    }
}
