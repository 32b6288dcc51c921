//! Configuration management for catalina-launch

pub mod options;
mod settings;

// Re-export main types
pub use options::LaunchOptions;
pub use settings::{Settings, CONFIG_FILE_NAMES};
