use std::io;

/// Errors that can occur while building Tomcat launch descriptors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported Tomcat version: {0}")]
    UnsupportedVersion(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Version detection error: {0}")]
    DetectionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for catalina-launch operations
pub type Result<T> = std::result::Result<T, Error>;
