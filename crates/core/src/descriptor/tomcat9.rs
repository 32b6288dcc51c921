//! Tomcat 9.x
//!
//! Runs on Java 8 and later. `java.endorsed.dirs` is never passed since Java 9+
//! rejects it; the `--add-opens` flags are passed only to modular runtimes.

use super::{base, LaunchDescriptor};
use crate::context::LaunchContext;
use crate::paths;
use crate::version::ServerVersion;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Tomcat9Descriptor {
    context: LaunchContext,
}

impl Tomcat9Descriptor {
    pub fn new(context: LaunchContext) -> Self {
        Self { context }
    }
}

impl LaunchDescriptor for Tomcat9Descriptor {
    fn version(&self) -> ServerVersion {
        ServerVersion::Tomcat9
    }

    fn context(&self) -> &LaunchContext {
        &self.context
    }

    fn label(&self) -> &'static str {
        "Tomcat 9.x"
    }

    fn classpath(&self) -> Vec<PathBuf> {
        base::bootstrap_classpath(&self.context, &["bootstrap.jar", "tomcat-juli.jar"])
    }

    fn vm_args(&self) -> Vec<String> {
        let mut args = base::home_args(&self.context, false);
        args.extend(base::juli_args(&self.context));
        args.extend(base::module_args(&self.context));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchOptions;
    use crate::descriptor::base::ADD_OPENS;
    use std::path::Path;
    use std::sync::Arc;

    fn descriptor_with(
        runtime: &str,
        probe: impl Fn(&Path) -> bool + Send + Sync + 'static,
    ) -> Tomcat9Descriptor {
        let context = LaunchContext::new("/opt/tomcat9", runtime, LaunchOptions::new())
            .with_probe(Arc::new(probe));
        Tomcat9Descriptor::new(context)
    }

    fn java8() -> Tomcat9Descriptor {
        descriptor_with("/usr/lib/jvm/java-8", |path: &Path| path.ends_with("lib/tools.jar"))
    }

    fn java11() -> Tomcat9Descriptor {
        descriptor_with("/usr/lib/jvm/java-11", |path: &Path| path.ends_with("lib/modules"))
    }

    #[test]
    fn test_no_endorsed_dirs() {
        for descriptor in [java8(), java11()] {
            let args = descriptor.vm_args();
            assert!(!args.iter().any(|a| a.starts_with("-Djava.endorsed.dirs")));
            assert_eq!(args[0], "-Dcatalina.home=\"/opt/tomcat9\"");
            assert_eq!(args[1], "-Dcatalina.base=\"/opt/tomcat9\"");
        }
    }

    #[test]
    fn test_java8_gets_no_module_flags() {
        let descriptor = java8();
        let args = descriptor.vm_args();

        assert!(!args.iter().any(|a| a.starts_with("--add-opens")));
        assert_eq!(args.len(), 5);
        assert!(descriptor.classpath().ends_with(&[PathBuf::from("/usr/lib/jvm/java-8/lib/tools.jar")]));
    }

    #[test]
    fn test_java11_gets_module_flags_after_logging() {
        let args = java11().vm_args();

        assert_eq!(args.len(), 5 + ADD_OPENS.len());
        assert_eq!(&args[5..], ADD_OPENS.as_slice());
        assert!(args.iter().any(|a| a == "--add-opens=java.base/java.util.concurrent=ALL-UNNAMED"));
    }

    #[test]
    fn test_module_flags_precede_security_args() {
        let context = LaunchContext::new(
            "/opt/tomcat9",
            "/usr/lib/jvm/java-17",
            LaunchOptions::new().with_security_manager(true),
        )
        .with_probe(Arc::new(|path: &Path| path.ends_with("lib/modules")));
        let args = Tomcat9Descriptor::new(context).vm_args();

        assert_eq!(args[args.len() - 3], "--add-opens=java.rmi/sun.rmi.transport=ALL-UNNAMED");
        assert_eq!(args[args.len() - 2], "-Djava.security.manager");
    }
}
