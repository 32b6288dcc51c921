//! catalina-launch - launch descriptors for Apache Tomcat
//!
//! This crate provides functionality to:
//! - Compute the classpath, JVM arguments and program arguments that start or stop a Tomcat server
//! - Pick the right descriptor for a Tomcat major version, or detect it from an installation
//! - Supply IDE metadata such as library paths and the `server.xml` insertion marker
pub mod command;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod detect;
pub mod error;
pub mod interfaces;
pub mod paths;
pub mod plan;
pub mod registry;
pub mod services;
pub mod version;

// Re-export commonly used types and traits
pub use error::{Error, Result};

pub use command::LaunchCommand;
pub use config::{LaunchOptions, Settings};
pub use context::LaunchContext;
pub use descriptor::{ClasspathEntry, LaunchDescriptor};
pub use interfaces::{ConfigMode, FileProbe, OptionSource};
pub use plan::LaunchPlan;
pub use registry::DescriptorRegistry;
pub use version::ServerVersion;
