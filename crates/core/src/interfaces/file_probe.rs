//! File existence probe
//!
//! The only file system question a descriptor ever asks is "does this optional
//! library exist". Routing it through a trait keeps classpath computation
//! testable without touching disk.

use std::path::Path;

/// Answers whether a path exists
pub trait FileProbe: Send + Sync {
    /// Check if a path exists (a stub may answer from memory)
    fn exists(&self, path: &Path) -> bool;
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> bool + Send + Sync,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}
