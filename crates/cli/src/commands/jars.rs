use anyhow::{Context, Result};

use crate::cli::GlobalArgs;
use crate::config::load_descriptor;
use crate::display::print_jars;

pub fn jars_command(global: &GlobalArgs, json: bool) -> Result<()> {
    let (_, descriptor) = load_descriptor(global)?;
    let jars = descriptor.tomcat_jars();

    if json {
        let out = serde_json::to_string_pretty(&jars).context("Failed to serialize jars")?;
        println!("{out}");
    } else {
        print_jars(&jars);
    }

    Ok(())
}
