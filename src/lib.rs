//! Integration test and demo host for the catalina-launch workspace

pub use catalina_launch_core::*;
