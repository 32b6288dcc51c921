//! Derived output bundle for one start/stop request

use crate::descriptor::{ClasspathEntry, LaunchDescriptor};
use crate::version::ServerVersion;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a descriptor produces for one command.
///
/// Recomputed from the descriptor on every [`LaunchPlan::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub version: ServerVersion,
    pub label: String,
    pub command: String,
    pub main_class: String,
    pub classpath: Vec<PathBuf>,
    pub vm_args: Vec<String>,
    pub prg_args: Vec<String>,
    pub xml_insertion_marker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir_directive: Option<String>,
    pub tomcat_jars: Vec<ClasspathEntry>,
}

impl LaunchPlan {
    pub fn build(descriptor: &dyn LaunchDescriptor, command: &str, work_folder: Option<&str>) -> Self {
        Self {
            version: descriptor.version(),
            label: descriptor.label().to_string(),
            command: command.to_string(),
            main_class: descriptor.main_class().to_string(),
            classpath: descriptor.classpath(),
            vm_args: descriptor.vm_args(),
            prg_args: descriptor.prg_args(command),
            xml_insertion_marker: descriptor.xml_tag_after_context_definition().to_string(),
            work_dir_directive: work_folder.map(|folder| descriptor.context_work_dir(folder)),
            tomcat_jars: descriptor.tomcat_jars(),
        }
    }

    /// Plan for the descriptor's start command
    pub fn start(descriptor: &dyn LaunchDescriptor) -> Self {
        Self::build(descriptor, descriptor.start_command(), None)
    }

    /// Plan for the descriptor's stop command
    pub fn stop(descriptor: &dyn LaunchDescriptor) -> Self {
        Self::build(descriptor, descriptor.stop_command(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchOptions;
    use crate::context::LaunchContext;
    use crate::descriptor::Tomcat6Descriptor;
    use std::path::Path;
    use std::sync::Arc;

    fn descriptor() -> Tomcat6Descriptor {
        let ctx = LaunchContext::new("/opt/tomcat", "/jdk", LaunchOptions::new().with_server_xml("/a/b.xml"))
            .with_probe(Arc::new(|_: &Path| true));
        Tomcat6Descriptor::new(ctx)
    }

    #[test]
    fn test_build_collects_descriptor_outputs() {
        let d = descriptor();
        let plan = LaunchPlan::build(&d, "start", Some("work/Catalina"));

        assert_eq!(plan.version, ServerVersion::Tomcat6);
        assert_eq!(plan.label, "Tomcat 6.x");
        assert_eq!(plan.prg_args, vec!["-config", "\"/a/b.xml\"", "start"]);
        assert_eq!(plan.classpath.len(), 2);
        assert_eq!(plan.xml_insertion_marker, "</Host>");
        assert_eq!(plan.work_dir_directive.as_deref(), Some("workDir=\"work/Catalina\""));
        assert_eq!(plan.tomcat_jars.len(), 5);
    }

    #[test]
    fn test_stop_plan() {
        let plan = LaunchPlan::stop(&descriptor());
        assert_eq!(plan.command, "stop");
        assert_eq!(plan.prg_args.last().map(String::as_str), Some("stop"));
        assert!(plan.work_dir_directive.is_none());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(LaunchPlan::start(&descriptor()), LaunchPlan::start(&descriptor()));
    }

    #[test]
    fn test_json_round_trip_keeps_version_tag() {
        let plan = LaunchPlan::start(&descriptor());
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["version"], "6.x");
        assert!(json.get("work_dir_directive").is_none());

        let back: LaunchPlan = serde_json::from_value(json).unwrap();
        assert_eq!(back, plan);
    }
}
