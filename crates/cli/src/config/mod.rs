//! Settings resolution for the CLI: file, then command-line flags, then environment

use anyhow::{Context, Result};
use catalina_launch_core::{DescriptorRegistry, LaunchContext, LaunchDescriptor, ServerVersion, Settings};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Load settings and layer the global flags and environment on top
pub fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let mut settings = match &global.config {
        Some(path) => Settings::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Settings::discover(&cwd)?
        }
    };

    apply_flags(&mut settings, global)?;
    settings.apply_env_defaults();

    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

/// Command-line flags win over anything in the settings file
pub fn apply_flags(settings: &mut Settings, global: &GlobalArgs) -> Result<()> {
    if let Some(tag) = &global.server_version {
        settings.version = Some(ServerVersion::parse_tag(tag)?);
    }
    if let Some(home) = &global.home {
        settings.installation = Some(home.clone());
    }
    if let Some(java_home) = &global.java_home {
        settings.runtime = Some(java_home.clone());
    }
    if let Some(base) = &global.base {
        settings.options.base_dir = Some(base.clone());
    }
    if let Some(server_xml) = &global.server_xml {
        settings.options = settings.options.clone().with_server_xml(server_xml.clone());
    }
    if let Some(enabled) = global.security_manager {
        settings.options.security_manager = enabled;
    }
    Ok(())
}

/// Settings, bound context and the descriptor for the resolved version
pub fn load_descriptor(global: &GlobalArgs) -> Result<(Settings, Box<dyn LaunchDescriptor>)> {
    let settings = load_settings(global)?;
    let version = settings
        .resolve_version()
        .context("Could not determine the Tomcat version (use --server-version)")?;
    let context: LaunchContext = settings.context()?;
    let descriptor = DescriptorRegistry::new().for_server_version(version, context)?;
    Ok((settings, descriptor))
}

/// Installation given on the command line, in settings or via `CATALINA_HOME`
pub fn installation_dir(global: &GlobalArgs) -> Result<PathBuf> {
    let settings = load_settings(global)?;
    Ok(settings.installation()?.to_path_buf())
}
