pub mod formatter;

pub use formatter::{print_jars, print_plan};
