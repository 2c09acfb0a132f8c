//! Small value types used by generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Template used for JSF 1.1 tag classes.
pub const TAG_TEMPLATE_11: &str = "tagClass11.tmpl";
/// Template used for JSF 1.2 and 2.0 tag classes.
pub const TAG_TEMPLATE_12: &str = "tagClass12.tmpl";

/// Default location of the metadata file under the build directory.
pub const DEFAULT_METADATA_FILE: &str = "META-INF/myfaces-metadata.xml";

/// Targeted JSF specification version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JsfVersion {
    #[default]
    #[serde(rename = "1.1")]
    V11,
    #[serde(rename = "1.2")]
    V12,
    #[serde(rename = "2.0")]
    V20,
}

impl JsfVersion {
    /// Name of the built-in tag class template for this version.
    pub fn default_template_name(self) -> &'static str {
        match self {
            Self::V11 => TAG_TEMPLATE_11,
            Self::V12 | Self::V20 => TAG_TEMPLATE_12,
        }
    }
}

impl FromStr for JsfVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1.1" | "11" => Ok(Self::V11),
            "1.2" | "12" => Ok(Self::V12),
            "2.0" | "20" => Ok(Self::V20),
            other => Err(DomainError::InvalidJsfVersion(other.to_string())),
        }
    }
}

impl fmt::Display for JsfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V11 => write!(f, "1.1"),
            Self::V12 => write!(f, "1.2"),
            Self::V20 => write!(f, "2.0"),
        }
    }
}

/// Resolve the template name: an explicit name wins over the version default.
pub fn template_name(explicit: Option<&str>, version: Option<JsfVersion>) -> String {
    match explicit {
        Some(name) => name.to_string(),
        None => version.unwrap_or_default().default_template_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_spellings() {
        assert_eq!("1.1".parse::<JsfVersion>().unwrap(), JsfVersion::V11);
        assert_eq!("12".parse::<JsfVersion>().unwrap(), JsfVersion::V12);
        assert_eq!("2.0".parse::<JsfVersion>().unwrap(), JsfVersion::V20);
        assert!("3.0".parse::<JsfVersion>().is_err());
    }

    #[test]
    fn default_template_per_version() {
        assert_eq!(template_name(None, None), "tagClass11.tmpl");
        assert_eq!(template_name(None, Some(JsfVersion::V11)), "tagClass11.tmpl");
        assert_eq!(template_name(None, Some(JsfVersion::V12)), "tagClass12.tmpl");
        assert_eq!(template_name(None, Some(JsfVersion::V20)), "tagClass12.tmpl");
    }

    #[test]
    fn explicit_template_wins() {
        assert_eq!(
            template_name(Some("custom.tmpl"), Some(JsfVersion::V12)),
            "custom.tmpl"
        );
    }
}
