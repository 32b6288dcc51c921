//! Narrow interfaces the descriptors depend on
//!
//! These keep the launch logic free of any particular settings store or file
//! system, so it can be driven by in-memory stubs in tests.

pub mod file_probe;
pub mod option_source;

pub use file_probe::FileProbe;
pub use option_source::{ConfigMode, OptionSource};
