//! Launch descriptors: one strategy per Tomcat major version
//!
//! A descriptor is bound to a [`LaunchContext`] and computes, on demand, the
//! strings needed to start or stop that server. All versions expose the same
//! capability set so callers never need to know which one they hold.

pub mod base;
pub mod tomcat6;
pub mod tomcat7;
pub mod tomcat8;
pub mod tomcat9;

pub use base::ClasspathEntry;
pub use tomcat6::Tomcat6Descriptor;
pub use tomcat7::Tomcat7Descriptor;
pub use tomcat8::Tomcat8Descriptor;
pub use tomcat9::Tomcat9Descriptor;

use crate::context::LaunchContext;
use crate::paths;
use crate::version::ServerVersion;
use std::fmt;
use std::path::PathBuf;

/// Entry point shared by every supported Tomcat release
pub const BOOTSTRAP_MAIN_CLASS: &str = "org.apache.catalina.startup.Bootstrap";

/// Strategy producing classpath, JVM arguments and metadata for one version
pub trait LaunchDescriptor: Send + Sync + fmt::Debug {
    /// The version family this descriptor implements
    fn version(&self) -> ServerVersion;

    /// The context the descriptor was constructed with
    fn context(&self) -> &LaunchContext;

    /// Human readable name, e.g. `Tomcat 6.x`
    fn label(&self) -> &'static str;

    /// Launch classpath; the bootstrap jar always comes first
    fn classpath(&self) -> Vec<PathBuf>;

    /// JVM arguments in emission order
    fn vm_args(&self) -> Vec<String>;

    /// Program arguments for `command`
    fn prg_args(&self, command: &str) -> Vec<String> {
        base::config_prg_args(self.context(), command)
    }

    fn main_class(&self) -> &'static str {
        BOOTSTRAP_MAIN_CLASS
    }

    fn start_command(&self) -> &'static str {
        "start"
    }

    fn stop_command(&self) -> &'static str {
        "stop"
    }

    fn jasper_jar_path(&self) -> PathBuf {
        paths::relative(&["lib", "jasper.jar"])
    }

    fn servlet_jar_path(&self) -> PathBuf {
        paths::relative(&["lib", "servlet-api.jar"])
    }

    fn jsp_jar_path(&self) -> PathBuf {
        paths::relative(&["lib", "jsp-api.jar"])
    }

    fn el_jar_path(&self) -> PathBuf {
        paths::relative(&["lib", "el-api.jar"])
    }

    fn annotations_jar_path(&self) -> PathBuf {
        paths::relative(&["lib", "annotations-api.jar"])
    }

    /// Libraries this version adds on top of the common set, relative to the installation
    fn extra_jars(&self) -> Vec<PathBuf>;

    /// Common libraries followed by [`extra_jars`](Self::extra_jars); duplicates are kept
    fn tomcat_jars(&self) -> Vec<ClasspathEntry> {
        let home = self.context().installation();
        let mut jars = base::common_jars(self);
        jars.extend(
            self.extra_jars()
                .iter()
                .map(|jar| ClasspathEntry::new(home.join(jar))),
        );
        jars
    }

    /// Literal marking where context definitions end in `server.xml`
    fn xml_tag_after_context_definition(&self) -> &'static str {
        "</Host>"
    }

    /// `workDir="<work_folder>"`, without escaping embedded quotes
    fn context_work_dir(&self, work_folder: &str) -> String {
        format!("workDir={}", paths::quoted(work_folder))
    }
}
