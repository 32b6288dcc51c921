//! Option source interface
//!
//! The handful of user settings a descriptor reads, decoupled from wherever
//! the host keeps them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the server configuration is supplied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigMode {
    /// Start with an explicit `-config <server.xml>`
    ServerXml,
    /// Contexts are deployed as separate files; no `-config` argument
    #[default]
    ContextFiles,
}

impl ConfigMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigMode::ServerXml => "server_xml",
            ConfigMode::ContextFiles => "context_files",
        }
    }
}

impl fmt::Display for ConfigMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigMode {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "server_xml" | "serverxml" => Ok(ConfigMode::ServerXml),
            "context_files" | "contextfiles" | "context" => Ok(ConfigMode::ContextFiles),
            other => Err(crate::error::Error::ConfigError(format!(
                "unknown config mode '{other}'"
            ))),
        }
    }
}

/// Read-only access to the settings a descriptor needs
pub trait OptionSource {
    fn config_mode(&self) -> ConfigMode;

    /// Path of the `server.xml` used in [`ConfigMode::ServerXml`]
    fn config_file(&self) -> Option<&str>;

    /// Override for `catalina.base`; empty means "use the installation"
    fn base_dir(&self) -> Option<&str>;

    fn security_manager_enabled(&self) -> bool;
}
