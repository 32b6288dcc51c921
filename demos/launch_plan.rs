//! Print the start plan and java command line for a Tomcat 6 installation
//!
//! Usage: cargo run --example launch_plan -- /opt/tomcat /usr/lib/jvm/java-6

use catalina_launch_core::{
    DescriptorRegistry, LaunchCommand, LaunchContext, LaunchOptions, LaunchPlan,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let home = args.next().unwrap_or_else(|| "/opt/tomcat".to_string());
    let java_home = args.next().unwrap_or_else(|| "/usr/lib/jvm/java".to_string());

    let options = LaunchOptions::new().with_security_manager(true);
    let context = LaunchContext::new(&home, &java_home, options);
    let descriptor = DescriptorRegistry::new().for_version("6.x", context)?;

    let plan = LaunchPlan::start(descriptor.as_ref());
    println!("{}", serde_json::to_string_pretty(&plan)?);

    let command = LaunchCommand::from_plan(&plan, descriptor.context());
    println!("\n{}", command.to_shell_command());

    Ok(())
}
