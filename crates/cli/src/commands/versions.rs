use anyhow::Result;
use catalina_launch_core::{DescriptorRegistry, LaunchContext, LaunchOptions};

pub fn versions_command() -> Result<()> {
    let registry = DescriptorRegistry::new();

    for version in registry.supported_versions() {
        // Labels do not depend on the context, so any paths will do
        let context = LaunchContext::new("", "", LaunchOptions::new());
        let descriptor = registry.for_server_version(version, context)?;
        println!("{}\t{}", version, descriptor.label());
    }

    Ok(())
}
