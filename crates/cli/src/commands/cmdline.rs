use anyhow::Result;
use catalina_launch_core::{LaunchCommand, LaunchPlan};

use crate::cli::GlobalArgs;
use crate::config::load_descriptor;

/// Print the java invocation for `command`; nothing is executed
pub fn cmdline_command(global: &GlobalArgs, command: Option<&str>) -> Result<()> {
    let (_, descriptor) = load_descriptor(global)?;
    let command = command.unwrap_or(descriptor.start_command());

    let context = descriptor.context();
    let plan = LaunchPlan::build(descriptor.as_ref(), command, None);
    let launch = LaunchCommand::from_plan(&plan, context).with_working_dir(context.catalina_base());

    println!("{}", launch.to_shell_command());
    if let Some(ref dir) = launch.working_dir {
        println!("Working directory: {}", dir.display());
    }

    Ok(())
}
