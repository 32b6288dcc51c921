//! Default implementations of the core interfaces

pub mod fs_probe;

pub use fs_probe::FsProbe;
