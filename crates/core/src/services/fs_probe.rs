//! File system backed probe
//!
//! Provides standard std::fs based existence checks.

use crate::interfaces::FileProbe;
use std::path::Path;

/// Default implementation of FileProbe using std::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FsProbe {
    pub fn new() -> Self {
        Self
    }
}

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_probe_sees_real_files() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("tools.jar");

        assert!(!FsProbe::new().exists(&file));
        std::fs::write(&file, b"").unwrap();
        assert!(FsProbe::new().exists(&file));
    }
}
