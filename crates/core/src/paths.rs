//! Path and value helpers shared by every descriptor
//!
//! Everything here is plain string/path assembly. Nothing is validated: a bad
//! root simply yields a bad path, which surfaces later when something tries to
//! use it.

use std::path::{Path, PathBuf};

/// Separator placed between classpath entries on this platform
#[cfg(windows)]
pub const CLASSPATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const CLASSPATH_SEPARATOR: &str = ":";

/// Join `segments` under `root` using the platform separator
pub fn resolve(root: &Path, segments: &[&str]) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in segments {
        path.push(segment);
    }
    path
}

/// Build a relative path such as `lib/jasper.jar`
pub fn relative(segments: &[&str]) -> PathBuf {
    segments.iter().collect()
}

/// Wrap a value in literal double quotes.
///
/// No escaping happens: embedded quotes or shell metacharacters pass through
/// untouched, so callers going through a real shell must re-escape.
pub fn quoted(value: impl AsRef<str>) -> String {
    format!("\"{}\"", value.as_ref())
}

/// `-Dkey="value"`
pub fn system_property(key: &str, value: impl AsRef<str>) -> String {
    format!("-D{}={}", key, quoted(value))
}

/// Lossy display form used when a path has to become part of an argument
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
