//! Inputs a descriptor is constructed with

use crate::config::LaunchOptions;
use crate::interfaces::{FileProbe, OptionSource};
use crate::paths;
use crate::services::FsProbe;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Installation, Java runtime and options for one launch attempt.
///
/// Cloning is cheap; the probe is shared but has no mutable state.
#[derive(Clone)]
pub struct LaunchContext {
    installation: PathBuf,
    runtime: PathBuf,
    options: LaunchOptions,
    probe: Arc<dyn FileProbe>,
}

impl LaunchContext {
    pub fn new(
        installation: impl Into<PathBuf>,
        runtime: impl Into<PathBuf>,
        options: LaunchOptions,
    ) -> Self {
        Self {
            installation: installation.into(),
            runtime: runtime.into(),
            options,
            probe: Arc::new(FsProbe::new()),
        }
    }

    /// Build a context from any option source, taking a snapshot of it
    pub fn from_source(
        installation: impl Into<PathBuf>,
        runtime: impl Into<PathBuf>,
        source: &dyn OptionSource,
    ) -> Self {
        Self::new(installation, runtime, LaunchOptions::from_source(source))
    }

    pub fn with_probe(mut self, probe: Arc<dyn FileProbe>) -> Self {
        self.probe = probe;
        self
    }

    /// Tomcat installation root (`CATALINA_HOME`)
    pub fn installation(&self) -> &Path {
        &self.installation
    }

    /// Java installation root (`JAVA_HOME`)
    pub fn runtime(&self) -> &Path {
        &self.runtime
    }

    pub fn options(&self) -> &LaunchOptions {
        &self.options
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.probe.exists(path)
    }

    /// Java 9+ runtimes ship their class library as the `lib/modules` image
    pub fn is_modular_runtime(&self) -> bool {
        self.exists(&paths::resolve(&self.runtime, &["lib", "modules"]))
    }

    /// Effective `catalina.base`: the override when non-empty, else the installation
    pub fn catalina_base(&self) -> PathBuf {
        match self.options.base_dir.as_deref() {
            Some(base) if !base.is_empty() => PathBuf::from(base),
            _ => self.installation.clone(),
        }
    }

    /// `server.xml` passed with `-config`, defaulting to the one under `conf/`
    pub fn config_file(&self) -> String {
        match self.options.config_file.as_deref() {
            Some(file) => file.to_string(),
            None => paths::display(&paths::resolve(
                &self.installation,
                &["conf", "server.xml"],
            )),
        }
    }
}

impl fmt::Debug for LaunchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchContext")
            .field("installation", &self.installation)
            .field("runtime", &self.runtime)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
