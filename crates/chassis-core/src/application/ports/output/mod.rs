//! The six trait seams the pipeline reaches the outside world through.
//!
//! Production implementations live in `chassis-adapters`; tests substitute
//! mocks or the in-memory filesystem. Each trait documents which error a
//! conforming implementation must produce for its failure cases.

use crate::domain::{AppConfig, MergeReport, MergeSpec, TemplateContext};
use crate::error::ChassisResult;
use std::path::Path;

/// Port for loading the project configuration.
///
/// Implemented by:
/// - `chassis_adapters::config_source::YamlConfigSource` (production)
///
/// A missing file is `DomainError::ConfigMissing`; a present but
/// unparseable file is `ApplicationError::ConfigUnreadable`.
pub trait ConfigSource: Send + Sync {
    /// Load and deserialize the configuration.
    fn load(&self) -> ChassisResult<AppConfig>;
}

/// Port for filesystem operations the pipeline needs outside of merging.
///
/// Implemented by:
/// - `chassis_adapters::filesystem::LocalFilesystem` (production)
/// - `chassis_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// True when `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// True when `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Make `path` a directory, creating missing parents.
    fn create_dir_all(&self, path: &Path) -> ChassisResult<()>;

    /// Names of the immediate subdirectories of `path`, sorted.
    ///
    /// A missing `path` yields an empty list, so callers can probe
    /// optional trees without an existence check first.
    fn subdirs(&self, path: &Path) -> ChassisResult<Vec<String>>;

    /// Whether the directory at `path` has no entries at all.
    fn is_empty_dir(&self, path: &Path) -> ChassisResult<bool>;
}

/// Port for process environment lookup.
///
/// Implemented by:
/// - `chassis_adapters::env::SystemEnvironment` (production)
/// - `chassis_adapters::env::MapEnvironment` (testing)
pub trait Environment: Send + Sync {
    /// The variable's value, or `None` when unset or not unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// Port for one merge step of the composition pipeline.
///
/// Implemented by:
/// - `chassis_adapters::composer::WalkdirComposer` (production)
pub trait TreeComposer: Send + Sync {
    /// Layer `spec.source` into `spec.dest` under its filters,
    /// rendering templates against `context`.
    fn compose(&self, spec: &MergeSpec, context: &TemplateContext) -> ChassisResult<MergeReport>;
}

/// Port for expanding template text against a context.
///
/// Implemented by:
/// - `chassis_adapters::renderer::MinijinjaRenderer` (production)
///
/// An undefined variable is a render error, never empty output.
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against `context`.
    fn render(&self, source: &str, context: &TemplateContext) -> ChassisResult<String>;
}

/// Port for blocking external commands (the platform build tools).
///
/// Implemented by:
/// - `chassis_adapters::runner::ProcessRunner` (production)
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `cwd`, inheriting stdio, and wait.
    ///
    /// A missing binary is `ApplicationError::CommandNotFound`; a non-zero
    /// exit is `ApplicationError::CommandFailed`.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ChassisResult<()>;
}
