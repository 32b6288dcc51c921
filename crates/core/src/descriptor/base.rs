//! Pieces shared by the per-version descriptors

use super::LaunchDescriptor;
use crate::context::LaunchContext;
use crate::interfaces::ConfigMode;
use crate::paths::{self, display, quoted, system_property};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// A library path with optional attachments, as registered with an IDE
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClasspathEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_attachment: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_attachment: Option<PathBuf>,
}

impl ClasspathEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source_attachment: None,
            doc_attachment: None,
        }
    }
}

/// Bootstrap jar plus any other `bin/` jars, then the JDK's `tools.jar` if present
pub fn bootstrap_classpath(ctx: &LaunchContext, bin_jars: &[&str]) -> Vec<PathBuf> {
    let home = ctx.installation();
    let mut classpath: Vec<PathBuf> = bin_jars
        .iter()
        .map(|jar| paths::resolve(home, &["bin", jar]))
        .collect();

    let tools_jar = paths::resolve(ctx.runtime(), &["lib", "tools.jar"]);
    if ctx.exists(&tools_jar) {
        debug!("Adding {:?} to classpath", tools_jar);
        classpath.push(tools_jar);
    } else {
        debug!("No tools.jar at {:?}, skipping", tools_jar);
    }

    classpath
}

/// `catalina.home`, optionally `java.endorsed.dirs`, `catalina.base` and `java.io.tmpdir`
pub fn home_args(ctx: &LaunchContext, endorsed: bool) -> Vec<String> {
    let home = ctx.installation();
    let base = ctx.catalina_base();

    let mut args = vec![system_property("catalina.home", display(home))];
    if endorsed {
        let endorsed_dir = paths::resolve(home, &["endorsed"]);
        args.push(system_property("java.endorsed.dirs", display(&endorsed_dir)));
    }
    args.push(system_property("catalina.base", display(&base)));
    args.push(system_property(
        "java.io.tmpdir",
        display(&paths::resolve(&base, &["temp"])),
    ));
    args
}

/// JULI log manager and its `logging.properties` under the base directory
pub fn juli_args(ctx: &LaunchContext) -> Vec<String> {
    let logging_config = paths::resolve(&ctx.catalina_base(), &["conf", "logging.properties"]);
    vec![
        "-Djava.util.logging.manager=org.apache.juli.ClassLoaderLogManager".to_string(),
        system_property("java.util.logging.config.file", display(&logging_config)),
    ]
}

/// `--add-opens` flags `catalina.sh` hands to Java 9+ through `JDK_JAVA_OPTIONS`
pub const ADD_OPENS: [&str; 5] = [
    "--add-opens=java.base/java.lang=ALL-UNNAMED",
    "--add-opens=java.base/java.io=ALL-UNNAMED",
    "--add-opens=java.base/java.util=ALL-UNNAMED",
    "--add-opens=java.base/java.util.concurrent=ALL-UNNAMED",
    "--add-opens=java.rmi/sun.rmi.transport=ALL-UNNAMED",
];

/// Module flags, only for runtimes that understand them; Java 8 refuses to start
pub fn module_args(ctx: &LaunchContext) -> Vec<String> {
    if !ctx.is_modular_runtime() {
        debug!("{:?} is not a modular runtime, skipping --add-opens", ctx.runtime());
        return Vec::new();
    }
    ADD_OPENS.iter().map(|flag| flag.to_string()).collect()
}

/// Security manager flag and policy file, only when enabled
pub fn security_args(ctx: &LaunchContext) -> Vec<String> {
    if !ctx.options().security_manager {
        return Vec::new();
    }

    let policy = paths::resolve(&ctx.catalina_base(), &["conf", "catalina.policy"]);
    vec![
        "-Djava.security.manager".to_string(),
        system_property("java.security.policy", display(&policy)),
    ]
}

/// `-config "<server.xml>" <command>` in server.xml mode, otherwise just `<command>`
pub fn config_prg_args(ctx: &LaunchContext, command: &str) -> Vec<String> {
    match ctx.options().config_mode {
        ConfigMode::ServerXml => vec![
            "-config".to_string(),
            quoted(ctx.config_file()),
            command.to_string(),
        ],
        ConfigMode::ContextFiles => vec![command.to_string()],
    }
}

/// Jasper, servlet and JSP libraries under the installation.
///
/// Built fresh on every call so callers may extend the result freely.
pub fn common_jars<D: LaunchDescriptor + ?Sized>(descriptor: &D) -> Vec<ClasspathEntry> {
    let home = descriptor.context().installation();
    [
        descriptor.jasper_jar_path(),
        descriptor.servlet_jar_path(),
        descriptor.jsp_jar_path(),
    ]
    .iter()
    .map(|jar| ClasspathEntry::new(home.join(jar)))
    .collect()
}
