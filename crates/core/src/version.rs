//! Supported Tomcat major versions and tag parsing

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// Accepts "6", "6.x", "6.0.53", "v7", "tomcat8", "Tomcat 9.x", "apache-tomcat-9.0.80"
static VERSION_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:apache[\s_-]*)?(?:tomcat[\s_-]*)?v?(\d+)(?:\.(?:\d+|x))*$")
        .expect("version tag pattern is valid")
});

/// A Tomcat major version with its own launch descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ServerVersion {
    Tomcat6,
    Tomcat7,
    Tomcat8,
    Tomcat9,
}

impl ServerVersion {
    pub const ALL: [ServerVersion; 4] = [
        ServerVersion::Tomcat6,
        ServerVersion::Tomcat7,
        ServerVersion::Tomcat8,
        ServerVersion::Tomcat9,
    ];

    pub fn major(&self) -> u32 {
        match self {
            ServerVersion::Tomcat6 => 6,
            ServerVersion::Tomcat7 => 7,
            ServerVersion::Tomcat8 => 8,
            ServerVersion::Tomcat9 => 9,
        }
    }

    pub fn from_major(major: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.major() == major)
    }

    /// Canonical tag, e.g. `6.x`
    pub fn tag(&self) -> String {
        format!("{}.x", self.major())
    }

    /// Parse a user supplied tag
    pub fn parse_tag(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        let major = VERSION_TAG
            .captures(trimmed)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| Error::UnsupportedVersion(tag.to_string()))?;

        Self::from_major(major).ok_or_else(|| Error::UnsupportedVersion(tag.to_string()))
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.x", self.major())
    }
}

impl FromStr for ServerVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_tag(s)
    }
}

impl Serialize for ServerVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag())
    }
}

impl<'de> Deserialize<'de> for ServerVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse_tag(&tag).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_tags() {
        assert_eq!(ServerVersion::parse_tag("6.x").unwrap(), ServerVersion::Tomcat6);
        assert_eq!(ServerVersion::parse_tag("6").unwrap(), ServerVersion::Tomcat6);
        assert_eq!(ServerVersion::parse_tag("6.0.53").unwrap(), ServerVersion::Tomcat6);
        assert_eq!(ServerVersion::parse_tag("tomcat7").unwrap(), ServerVersion::Tomcat7);
        assert_eq!(ServerVersion::parse_tag("Tomcat 8.x").unwrap(), ServerVersion::Tomcat8);
        assert_eq!(
            ServerVersion::parse_tag("apache-tomcat-9.0.80").unwrap(),
            ServerVersion::Tomcat9
        );
    }

    #[test]
    fn test_unknown_tags_are_unsupported() {
        for tag in ["5.5", "10.1", "", "jetty", "6.y"] {
            match ServerVersion::parse_tag(tag) {
                Err(Error::UnsupportedVersion(t)) => assert_eq!(t, tag),
                other => panic!("expected UnsupportedVersion for {tag:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&ServerVersion::Tomcat7).unwrap();
        assert_eq!(json, "\"7.x\"");
        let parsed: ServerVersion = serde_json::from_str("\"7.0.109\"").unwrap();
        assert_eq!(parsed, ServerVersion::Tomcat7);
    }
}
