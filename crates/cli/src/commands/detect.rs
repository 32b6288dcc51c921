use anyhow::{Context, Result};
use catalina_launch_core::detect::detect_version;
use std::path::PathBuf;

use crate::cli::GlobalArgs;
use crate::config::installation_dir;

pub fn detect_command(global: &GlobalArgs, path: Option<PathBuf>) -> Result<()> {
    let installation = match path {
        Some(path) => path,
        None => installation_dir(global)?,
    };

    let version = detect_version(&installation)
        .with_context(|| format!("Failed to detect Tomcat version in {}", installation.display()))?;
    println!("{version}");

    Ok(())
}
