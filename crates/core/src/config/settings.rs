use crate::{
    context::LaunchContext,
    detect,
    error::{Error, Result},
    interfaces::{ConfigMode, OptionSource},
    version::ServerVersion,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::LaunchOptions;

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".catalina-launch.json", "catalina-launch.json"];

/// Contents of a `.catalina-launch.json` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ServerVersion>,
    /// Tomcat installation (`CATALINA_HOME`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation: Option<PathBuf>,
    /// Java installation (`JAVA_HOME`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<PathBuf>,
    #[serde(flatten)]
    pub options: LaunchOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_folder: Option<String>,
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize settings: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a settings file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest settings file above `start_path`, or defaults if there is none
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                debug!("Loading settings from {:?}", path);
                Self::load_from_file(&path)
            }
            None => {
                debug!("No settings file above {:?}, using defaults", start_path);
                Ok(Self::default())
            }
        }
    }

    /// Fill unset values from `CATALINA_HOME`, `CATALINA_BASE` and `JAVA_HOME`
    pub fn apply_env_defaults(&mut self) {
        self.apply_defaults_from(|key| std::env::var(key).ok());
    }

    /// Same as [`apply_env_defaults`](Self::apply_env_defaults) with a custom lookup
    pub fn apply_defaults_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if self.installation.is_none() {
            self.installation = lookup("CATALINA_HOME").map(PathBuf::from);
        }
        if self.options.base_dir.is_none() {
            self.options.base_dir = lookup("CATALINA_BASE");
        }
        if self.runtime.is_none() {
            self.runtime = lookup("JAVA_HOME").map(PathBuf::from);
        }
    }

    /// The configured version, or the one detected from the installation
    pub fn resolve_version(&self) -> Result<ServerVersion> {
        if let Some(version) = self.version {
            return Ok(version);
        }

        let installation = self.installation()?;
        debug!("No version configured, detecting from {:?}", installation);
        detect::detect_version(installation)
    }

    pub fn installation(&self) -> Result<&Path> {
        self.installation.as_deref().ok_or_else(|| {
            Error::ConfigError("no Tomcat installation configured (set CATALINA_HOME)".to_string())
        })
    }

    pub fn runtime(&self) -> Result<&Path> {
        self.runtime.as_deref().ok_or_else(|| {
            Error::ConfigError("no Java runtime configured (set JAVA_HOME)".to_string())
        })
    }

    /// Bind installation, runtime and options into a launch context
    pub fn context(&self) -> Result<LaunchContext> {
        Ok(LaunchContext::from_source(
            self.installation()?,
            self.runtime()?,
            self,
        ))
    }
}

impl OptionSource for Settings {
    fn config_mode(&self) -> ConfigMode {
        self.options.config_mode
    }

    fn config_file(&self) -> Option<&str> {
        self.options.config_file.as_deref()
    }

    fn base_dir(&self) -> Option<&str> {
        self.options.base_dir.as_deref()
    }

    fn security_manager_enabled(&self) -> bool {
        self.options.security_manager
    }
}
