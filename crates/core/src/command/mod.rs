//! Assembly of a concrete `java` invocation from a launch plan

pub mod launch_command;

pub use launch_command::LaunchCommand;
