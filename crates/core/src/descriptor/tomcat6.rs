//! Tomcat 6.x
//!
//! See `$CATALINA_HOME/bin/catalina.sh` of a 6.0 distribution.

use super::{base, LaunchDescriptor};
use crate::context::LaunchContext;
use crate::version::ServerVersion;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Tomcat6Descriptor {
    context: LaunchContext,
}

impl Tomcat6Descriptor {
    pub fn new(context: LaunchContext) -> Self {
        Self { context }
    }
}

impl LaunchDescriptor for Tomcat6Descriptor {
    fn version(&self) -> ServerVersion {
        ServerVersion::Tomcat6
    }

    fn context(&self) -> &LaunchContext {
        &self.context
    }

    fn label(&self) -> &'static str {
        "Tomcat 6.x"
    }

    fn classpath(&self) -> Vec<PathBuf> {
        base::bootstrap_classpath(&self.context, &["bootstrap.jar"])
    }

    fn vm_args(&self) -> Vec<String> {
        let mut args = base::home_args(&self.context, true);
        args.extend(base::security_args(&self.context));
        args
    }

    fn extra_jars(&self) -> Vec<PathBuf> {
        vec![self.el_jar_path(), self.annotations_jar_path()]
    }
}
