//! Integration tests for launch descriptors against a real file system

use catalina_launch_core::{
    DescriptorRegistry, LaunchContext, LaunchOptions, LaunchPlan, ServerVersion,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Layout {
    _temp: TempDir,
    home: PathBuf,
    jdk: PathBuf,
}

fn layout(with_tools_jar: bool) -> Layout {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("apache-tomcat-6.0.53");
    let jdk = temp.path().join("jdk1.6.0_45");

    fs::create_dir_all(home.join("bin")).unwrap();
    fs::create_dir_all(jdk.join("lib")).unwrap();
    fs::write(home.join("bin").join("bootstrap.jar"), b"").unwrap();
    if with_tools_jar {
        fs::write(jdk.join("lib").join("tools.jar"), b"").unwrap();
    }

    Layout {
        _temp: temp,
        home,
        jdk,
    }
}

fn vm_property<'a>(args: &'a [String], key: &str) -> Vec<&'a str> {
    let prefix = format!("-D{key}=");
    args.iter()
        .filter_map(|arg| arg.strip_prefix(&prefix))
        .map(|value| value.trim_matches('"'))
        .collect()
}

#[test]
fn test_tools_jar_included_only_when_present() {
    let registry = DescriptorRegistry::new();

    for present in [true, false] {
        let layout = layout(present);
        let ctx = LaunchContext::new(&layout.home, &layout.jdk, LaunchOptions::new());
        let descriptor = registry.for_version("6.x", ctx).unwrap();
        let classpath = descriptor.classpath();

        assert_eq!(classpath[0], layout.home.join("bin").join("bootstrap.jar"));
        assert_eq!(
            classpath.contains(&layout.jdk.join("lib").join("tools.jar")),
            present
        );
        assert_eq!(classpath.len(), if present { 2 } else { 1 });
    }
}

#[test]
fn test_every_version_starts_with_bootstrap_jar() {
    let layout = layout(false);
    let registry = DescriptorRegistry::new();

    for version in ServerVersion::ALL {
        let ctx = LaunchContext::new(&layout.home, &layout.jdk, LaunchOptions::new());
        let descriptor = registry.for_server_version(version, ctx).unwrap();

        assert!(!descriptor.start_command().is_empty());
        assert!(!descriptor.stop_command().is_empty());
        assert_eq!(
            descriptor.classpath().first(),
            Some(&layout.home.join("bin").join("bootstrap.jar"))
        );
    }
}

#[test]
fn test_tomcat9_module_flags_follow_runtime() {
    let registry = DescriptorRegistry::new();

    // Java 8 layout: tools.jar, no module image
    let java8 = layout(true);
    let ctx = LaunchContext::new(&java8.home, &java8.jdk, LaunchOptions::new());
    let args = registry.for_version("9.x", ctx).unwrap().vm_args();
    assert!(!args.iter().any(|arg| arg.starts_with("--add-opens")));

    let java11 = layout(false);
    fs::write(java11.jdk.join("lib").join("modules"), b"").unwrap();
    let ctx = LaunchContext::new(&java11.home, &java11.jdk, LaunchOptions::new());
    let args = registry.for_version("9.x", ctx).unwrap().vm_args();
    assert_eq!(args.iter().filter(|arg| arg.starts_with("--add-opens")).count(), 5);
}

#[test]
fn test_home_and_base_properties() {
    let layout = layout(false);
    let registry = DescriptorRegistry::new();

    for version in ServerVersion::ALL {
        let plain = LaunchContext::new(&layout.home, &layout.jdk, LaunchOptions::new());
        let args = registry.for_server_version(version, plain).unwrap().vm_args();
        let home = layout.home.to_string_lossy().into_owned();
        assert_eq!(vm_property(&args, "catalina.home"), vec![home.as_str()]);
        assert_eq!(vm_property(&args, "catalina.base"), vec![home.as_str()]);

        let options = LaunchOptions::new().with_base_dir("/srv/instance");
        let overridden = LaunchContext::new(&layout.home, &layout.jdk, options);
        let args = registry.for_server_version(version, overridden).unwrap().vm_args();
        assert_eq!(vm_property(&args, "catalina.base"), vec!["/srv/instance"]);
        assert_eq!(vm_property(&args, "catalina.home").len(), 1);
    }
}

#[test]
fn test_security_manager_flag_follows_option() {
    let layout = layout(false);
    let registry = DescriptorRegistry::new();

    for enabled in [true, false] {
        let options = LaunchOptions::new().with_security_manager(enabled);
        let ctx = LaunchContext::new(&layout.home, &layout.jdk, options);
        let args = registry.for_version("6.x", ctx).unwrap().vm_args();

        assert_eq!(args.iter().any(|a| a == "-Djava.security.manager"), enabled);
        assert_eq!(vm_property(&args, "java.security.policy").len(), usize::from(enabled));
    }
}

#[test]
fn test_program_arguments() {
    let registry = DescriptorRegistry::new();

    let options = LaunchOptions::new().with_server_xml("/a/b.xml");
    let ctx = LaunchContext::new("/opt/tomcat", "/jdk", options);
    let descriptor = registry.for_version("6.x", ctx).unwrap();
    assert_eq!(descriptor.prg_args("start"), vec!["-config", "\"/a/b.xml\"", "start"]);

    let ctx = LaunchContext::new("/opt/tomcat", "/jdk", LaunchOptions::new());
    let descriptor = registry.for_version("6.x", ctx).unwrap();
    assert_eq!(descriptor.prg_args("start"), vec!["start"]);
}

#[test]
fn test_context_work_dir_directive() {
    let ctx = LaunchContext::new("/opt/tomcat", "/jdk", LaunchOptions::new());
    let descriptor = DescriptorRegistry::new().for_version("6.x", ctx).unwrap();
    assert_eq!(descriptor.context_work_dir("work1"), r#"workDir="work1""#);
}

#[test]
fn test_plans_are_deterministic() {
    let layout = layout(true);
    let registry = DescriptorRegistry::new();
    let options = LaunchOptions::new()
        .with_server_xml(layout.home.join("conf/server.xml").to_string_lossy())
        .with_security_manager(true);

    let build = || {
        let ctx = LaunchContext::new(&layout.home, &layout.jdk, options.clone());
        let descriptor = registry.for_version("6.x", ctx).unwrap();
        (LaunchPlan::start(descriptor.as_ref()), LaunchPlan::start(descriptor.as_ref()))
    };

    let (first, second) = build();
    let (third, _) = build();
    assert_eq!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_missing_installation_is_passed_through() {
    let missing = Path::new("/definitely/not/here");
    let ctx = LaunchContext::new(missing, "/nope", LaunchOptions::new());
    let descriptor = DescriptorRegistry::new().for_version("7.x", ctx).unwrap();

    assert_eq!(descriptor.classpath()[0], missing.join("bin").join("bootstrap.jar"));
}
