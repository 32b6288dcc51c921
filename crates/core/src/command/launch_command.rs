use crate::context::LaunchContext;
use crate::paths::{self, CLASSPATH_SEPARATOR};
use crate::plan::LaunchPlan;
use std::path::{Path, PathBuf};

/// A `java` command line ready to hand to a process launcher.
///
/// Nothing here spawns processes; callers own that step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl LaunchCommand {
    /// Compose `java <vm args> -classpath <cp> <main class> <program args>`
    pub fn from_plan(plan: &LaunchPlan, context: &LaunchContext) -> Self {
        let mut args = plan.vm_args.clone();

        if !plan.classpath.is_empty() {
            args.push("-classpath".to_string());
            args.push(join_classpath(&plan.classpath));
        }

        args.push(plan.main_class.clone());
        args.extend(plan.prg_args.iter().cloned());

        Self {
            program: java_executable(context.runtime()),
            args,
            working_dir: None,
        }
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Render for display so that a POSIX shell splits it back into the same
    /// words the descriptor values denote
    pub fn to_shell_command(&self) -> String {
        let mut cmd = shell_word(&paths::display(&self.program));
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&shell_word(arg));
        }
        cmd
    }
}

/// `<runtime>/bin/java`, or `java.exe` on Windows
pub fn java_executable(runtime: &Path) -> PathBuf {
    let binary = if cfg!(windows) { "java.exe" } else { "java" };
    paths::resolve(runtime, &["bin", binary])
}

/// Join classpath entries with the platform separator
pub fn join_classpath(entries: &[PathBuf]) -> String {
    entries
        .iter()
        .map(|entry| paths::display(entry))
        .collect::<Vec<_>>()
        .join(CLASSPATH_SEPARATOR)
}

/// Descriptor values already carry literal double quotes that group them for
/// the shell, so those are passed through untouched.
fn shell_word(arg: &str) -> String {
    if arg.contains('"') || !arg.contains([' ', '\'']) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
