use anyhow::{Context, Result};
use catalina_launch_core::LaunchPlan;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::config::load_descriptor;
use crate::display::print_plan;

pub fn plan_command(
    global: &GlobalArgs,
    command: Option<&str>,
    work_dir: Option<&str>,
    json: bool,
) -> Result<()> {
    let (settings, descriptor) = load_descriptor(global)?;
    let command = command.unwrap_or(descriptor.start_command());
    let work_dir = work_dir.or(settings.work_folder.as_deref());

    debug!("Building {} plan for {}", command, descriptor.label());
    let plan = LaunchPlan::build(descriptor.as_ref(), command, work_dir);

    if json {
        let out = serde_json::to_string_pretty(&plan).context("Failed to serialize plan")?;
        println!("{out}");
    } else {
        print_plan(&plan);
    }

    Ok(())
}
