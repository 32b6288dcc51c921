pub mod cmdline;
pub mod detect;
pub mod init;
pub mod jars;
pub mod plan;
pub mod versions;

pub use cmdline::cmdline_command;
pub use detect::detect_command;
pub use init::init_command;
pub use jars::jars_command;
pub use plan::plan_command;
pub use versions::versions_command;
