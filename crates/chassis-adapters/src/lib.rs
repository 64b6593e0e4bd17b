//! Infrastructure adapters for Chassis.
//!
//! This crate implements the ports defined in `chassis-core`. All
//! external dependencies and real I/O live here: the filesystem, the
//! process environment, YAML config loading, template rendering, tree
//! composition, and child processes.

pub mod composer;
pub mod config_source;
pub mod env;
pub mod filesystem;
pub mod framework_root;
pub mod renderer;
pub mod runner;

// Flat re-exports; wiring code reads better without the module paths.
pub use composer::WalkdirComposer;
pub use config_source::YamlConfigSource;
pub use env::{MapEnvironment, SystemEnvironment};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use framework_root::{FRAMEWORK_HOME_VAR, resolve as resolve_framework_root};
pub use renderer::MinijinjaRenderer;
pub use runner::ProcessRunner;
