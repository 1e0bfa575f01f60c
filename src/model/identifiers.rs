//! Identifiers for frameworks and their content.
//!
//! Frameworks form a closed set selected by [`FrameworkId`]. Categories,
//! questions and recommendations are identified by slug strings authored in
//! the content files; the content loader checks their shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Regulatory framework an assessment is run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkId {
    /// EU NIS2 directive (2022/2555)
    Nis2,
    /// EU General Data Protection Regulation (2016/679)
    Gdpr,
    /// BSI Cloud Computing Compliance Criteria Catalogue
    BsiC5,
}

impl FrameworkId {
    /// Machine-readable slug, as used in content files
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Nis2 => "nis2",
            Self::Gdpr => "gdpr",
            Self::BsiC5 => "bsi-c5",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nis2 => "NIS2 Directive",
            Self::Gdpr => "GDPR",
            Self::BsiC5 => "BSI C5",
        }
    }

    /// Get all frameworks
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Nis2, Self::Gdpr, Self::BsiC5]
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FrameworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nis2" | "nis-2" => Ok(Self::Nis2),
            "gdpr" | "dsgvo" => Ok(Self::Gdpr),
            "bsi-c5" | "c5" => Ok(Self::BsiC5),
            other => Err(format!(
                "Unknown framework: {other}. Valid options: nis2, gdpr, bsi-c5"
            )),
        }
    }
}

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from its slug
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Get the identifier string
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

slug_id!(
    /// Identifier of a category within one framework
    CategoryId
);
slug_id!(
    /// Identifier of a question within one framework
    QuestionId
);
slug_id!(
    /// Identifier of a recommendation within one framework
    RecommendationId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_id_parsing() {
        assert_eq!("NIS2".parse::<FrameworkId>(), Ok(FrameworkId::Nis2));
        assert_eq!("c5".parse::<FrameworkId>(), Ok(FrameworkId::BsiC5));
        assert_eq!("dsgvo".parse::<FrameworkId>(), Ok(FrameworkId::Gdpr));
        assert!("iso27001".parse::<FrameworkId>().is_err());
    }

    #[test]
    fn test_framework_id_serde_uses_slug() {
        for id in FrameworkId::all() {
            let json = serde_json::to_string(id).expect("serialize");
            assert_eq!(json, format!("\"{}\"", id.slug()));
        }
    }

    #[test]
    fn test_slug_id_is_transparent() {
        let id: CategoryId = serde_json::from_str("\"incident-handling\"").expect("deserialize");
        assert_eq!(id.as_str(), "incident-handling");
        assert_eq!(id.to_string(), "incident-handling");
    }
}
