//! Tomcat 8.x
//!
//! Targets the 8.5 line. `lib/jaspic-api.jar` first ships with 8.5, so on an
//! 8.0.x installation `tomcat_jars` names one library that is not there.

use super::{base, LaunchDescriptor};
use crate::context::LaunchContext;
use crate::paths;
use crate::version::ServerVersion;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Tomcat8Descriptor {
    context: LaunchContext,
}

impl Tomcat8Descriptor {
    pub fn new(context: LaunchContext) -> Self {
        Self { context }
    }
}

impl LaunchDescriptor for Tomcat8Descriptor {
    fn version(&self) -> ServerVersion {
        ServerVersion::Tomcat8
    }

    fn context(&self) -> &LaunchContext {
        &self.context
    }

    fn label(&self) -> &'static str {
        "Tomcat 8.x"
    }

    fn classpath(&self) -> Vec<PathBuf> {
        base::bootstrap_classpath(&self.context, &["bootstrap.jar", "tomcat-juli.jar"])
    }

    fn vm_args(&self) -> Vec<String> {
        let mut args = base::home_args(&self.context, true);
        args.extend(base::juli_args(&self.context));
        args.extend(base::security_args(&self.context));
        args
    }

    fn extra_jars(&self) -> Vec<PathBuf> {
        vec![
            self.el_jar_path(),
            self.annotations_jar_path(),
            paths::relative(&["lib", "websocket-api.jar"]),
            paths::relative(&["lib", "jaspic-api.jar"]),
        ]
    }
}
