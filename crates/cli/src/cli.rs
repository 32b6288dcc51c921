use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    cmdline_command, detect_command, init_command, jars_command, plan_command, versions_command,
};

#[derive(Parser, Debug)]
#[command(name = "catalina-launch")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    CATALINA_HOME, CATALINA_BASE, JAVA_HOME    Fill settings not given elsewhere\n    RUST_LOG=debug                             Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings overrides accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Settings file (defaults to the nearest .catalina-launch.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Tomcat installation directory
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Java installation directory
    #[arg(long = "java-home", global = true)]
    pub java_home: Option<PathBuf>,

    /// Instance directory used as catalina.base
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Tomcat version tag, e.g. 6.x or 7.0.109 (detected when omitted)
    #[arg(long = "server-version", global = true)]
    pub server_version: Option<String>,

    /// Start with -config pointing at this server.xml
    #[arg(long = "server-xml", global = true)]
    pub server_xml: Option<String>,

    /// Run under the Java security manager (`--security-manager=false` turns off a configured one)
    #[arg(
        long = "security-manager",
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub security_manager: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show everything needed to launch the server
    #[command(visible_alias = "p")]
    Plan {
        /// Server command, e.g. start or stop (defaults to start)
        command: Option<String>,

        /// Context work folder to render as a workDir directive
        #[arg(short, long = "work-dir")]
        work_dir: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the java command line without executing it
    #[command(visible_alias = "c")]
    Command {
        /// Server command, e.g. start or stop (defaults to start)
        command: Option<String>,
    },
    /// List the Tomcat libraries to register with an IDE
    Jars {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported Tomcat versions
    Versions,
    /// Detect the Tomcat version of an installation
    Detect {
        /// Installation directory (defaults to --home or CATALINA_HOME)
        path: Option<PathBuf>,
    },
    /// Write a settings file
    Init {
        /// Directory to write into (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing settings file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the parsed command line
    pub fn execute(self) -> Result<()> {
        let global = self.global;
        match self.command {
            Commands::Plan {
                command,
                work_dir,
                json,
            } => plan_command(&global, command.as_deref(), work_dir.as_deref(), json),
            Commands::Command { command } => cmdline_command(&global, command.as_deref()),
            Commands::Jars { json } => jars_command(&global, json),
            Commands::Versions => versions_command(),
            Commands::Detect { path } => detect_command(&global, path),
            Commands::Init { cwd, force } => init_command(&global, cwd, force),
        }
    }
}
