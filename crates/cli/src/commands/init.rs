use anyhow::{Context, Result};
use catalina_launch_core::{Settings, detect::detect_version};
use std::{env, path::PathBuf};
use tracing::{debug, info};

use crate::cli::GlobalArgs;
use crate::config::apply_flags;

/// Write `.catalina-launch.json` from the given flags and environment
pub fn init_command(global: &GlobalArgs, cwd: Option<PathBuf>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => cwd,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = project_root.join(".catalina-launch.json");
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let mut settings = Settings::default();
    apply_flags(&mut settings, global)?;
    settings.apply_env_defaults();

    if settings.version.is_none() {
        if let Some(installation) = settings.installation.as_deref() {
            match detect_version(installation) {
                Ok(version) => {
                    info!("Detected Tomcat {} in {}", version, installation.display());
                    settings.version = Some(version);
                }
                Err(e) => debug!("Version detection skipped: {}", e),
            }
        }
    }

    settings
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
