use catalina_launch_core::{ClasspathEntry, LaunchPlan};

/// Human readable breakdown of a launch plan
pub fn format_plan(plan: &LaunchPlan) -> String {
    let mut out = String::new();

    out.push_str(&format!("🐱 {} ({})\n", plan.label, plan.command));
    out.push_str(&format!("   Main class: {}\n", plan.main_class));

    out.push_str("   Classpath:\n");
    for entry in &plan.classpath {
        out.push_str(&format!("     - {}\n", entry.display()));
    }

    out.push_str("   VM arguments:\n");
    for arg in &plan.vm_args {
        out.push_str(&format!("     {arg}\n"));
    }

    out.push_str(&format!("   Program arguments: {}\n", plan.prg_args.join(" ")));
    out.push_str(&format!("   Context insertion marker: {}\n", plan.xml_insertion_marker));
    if let Some(directive) = &plan.work_dir_directive {
        out.push_str(&format!("   Context work dir: {directive}\n"));
    }

    out
}

pub fn print_plan(plan: &LaunchPlan) {
    print!("{}", format_plan(plan));
}

pub fn print_jars(jars: &[ClasspathEntry]) {
    for jar in jars {
        println!("{}", jar.path.display());
    }
}
