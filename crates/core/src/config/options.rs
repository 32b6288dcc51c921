//! Launch options bound to a descriptor

use crate::interfaces::{ConfigMode, OptionSource};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the settings a descriptor reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LaunchOptions {
    pub config_mode: ConfigMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
    pub security_manager: bool,
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy whatever an option source currently reports
    pub fn from_source(source: &dyn OptionSource) -> Self {
        Self {
            config_mode: source.config_mode(),
            config_file: source.config_file().map(str::to_string),
            base_dir: source.base_dir().map(str::to_string),
            security_manager: source.security_manager_enabled(),
        }
    }

    pub fn with_config_mode(mut self, mode: ConfigMode) -> Self {
        self.config_mode = mode;
        self
    }

    /// Switch to [`ConfigMode::ServerXml`] with the given file
    pub fn with_server_xml(mut self, config_file: impl Into<String>) -> Self {
        self.config_mode = ConfigMode::ServerXml;
        self.config_file = Some(config_file.into());
        self
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_security_manager(mut self, enabled: bool) -> Self {
        self.security_manager = enabled;
        self
    }
}

impl OptionSource for LaunchOptions {
    fn config_mode(&self) -> ConfigMode {
        self.config_mode
    }

    fn config_file(&self) -> Option<&str> {
        self.config_file.as_deref()
    }

    fn base_dir(&self) -> Option<&str> {
        self.base_dir.as_deref()
    }

    fn security_manager_enabled(&self) -> bool {
        self.security_manager
    }
}
