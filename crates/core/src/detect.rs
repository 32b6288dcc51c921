//! Version detection from an unpacked distribution
//!
//! Tomcat distributions ship `RELEASE-NOTES` (and `RUNNING.txt`) whose header
//! names the exact release, e.g. `Apache Tomcat Version 6.0.53`.

use crate::error::{Error, Result};
use crate::version::ServerVersion;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static RELEASE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Apache Tomcat Version (\d+)\.(\d+)(?:\.(\d+))?")
        .expect("release line pattern is valid")
});

const MARKER_FILES: [&str; 2] = ["RELEASE-NOTES", "RUNNING.txt"];

/// Find the full release string (`6.0.53`) in release notes text
pub fn parse_release(text: &str) -> Option<String> {
    RELEASE_LINE.captures(text).map(|caps| {
        caps.iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(".")
    })
}

/// Detect the major version of the distribution rooted at `installation`
pub fn detect_version(installation: &Path) -> Result<ServerVersion> {
    for name in MARKER_FILES {
        let file = installation.join(name);
        let Ok(text) = std::fs::read_to_string(&file) else {
            debug!("Cannot read {:?}, trying next marker", file);
            continue;
        };

        if let Some(release) = parse_release(&text) {
            debug!("Detected Tomcat {} from {:?}", release, file);
            return ServerVersion::parse_tag(&release);
        }
    }

    Err(Error::DetectionError(format!(
        "no Tomcat release information found under {}",
        installation.display()
    )))
}
