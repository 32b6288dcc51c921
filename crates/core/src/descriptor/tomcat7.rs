//! Tomcat 7.x
//!
//! Adds the JULI logging jar and its log manager to the 6.x launch.

use super::{base, LaunchDescriptor};
use crate::context::LaunchContext;
use crate::paths;
use crate::version::ServerVersion;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Tomcat7Descriptor {
    context: LaunchContext,
}

impl Tomcat7Descriptor {
    pub fn new(context: LaunchContext) -> Self {
        Self { context }
    }
}

impl LaunchDescriptor for Tomcat7Descriptor {
    fn version(&self) -> ServerVersion {
        ServerVersion::Tomcat7
    }

    fn context(&self) -> &LaunchContext {
        &self.context
    }

    fn label(&self) -> &'static str {
        "Tomcat 7.x"
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
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchOptions;
    use std::path::Path;
    use std::sync::Arc;

    fn descriptor(options: LaunchOptions) -> Tomcat7Descriptor {
        let context = LaunchContext::new("/opt/tomcat7", "/jdk7", options)
            .with_probe(Arc::new(|_: &Path| false));
        Tomcat7Descriptor::new(context)
    }

    #[test]
    fn test_classpath_includes_juli() {
        assert_eq!(
            descriptor(LaunchOptions::new()).classpath(),
            vec![
                PathBuf::from("/opt/tomcat7/bin/bootstrap.jar"),
                PathBuf::from("/opt/tomcat7/bin/tomcat-juli.jar"),
            ]
        );
    }

    #[test]
    fn test_vm_args_put_logging_before_security() {
        let args = descriptor(LaunchOptions::new().with_security_manager(true)).vm_args();
        assert_eq!(args.len(), 8);
        assert_eq!(
            args[4],
            "-Djava.util.logging.manager=org.apache.juli.ClassLoaderLogManager"
        );
        assert_eq!(
            args[5],
            "-Djava.util.logging.config.file=\"/opt/tomcat7/conf/logging.properties\""
        );
        assert_eq!(args[6], "-Djava.security.manager");
    }

    #[test]
    fn test_extra_jars() {
        let d = descriptor(LaunchOptions::new());
        assert_eq!(d.label(), "Tomcat 7.x");
        assert_eq!(d.tomcat_jars().len(), 6);
        assert_eq!(
            d.tomcat_jars().last().map(|j| j.path.clone()),
            Some(PathBuf::from("/opt/tomcat7/lib/websocket-api.jar"))
        );
    }
}
