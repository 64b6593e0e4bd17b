//! Use-case layer: the orchestration services, the platform hook registry,
//! and the ports everything reaches the outside world through.
//!
//! Sequencing decisions live here. What counts as a valid config, a
//! well-formed version, or a matching path filter stays in `crate::domain`.

pub mod error;
pub mod hooks;
pub mod ports;
pub mod services;

pub use services::{BuildOrchestrator, InitService, SetupOutcome};

pub use hooks::{PLATFORM_REGISTRY, PlatformDef, PlatformHooks, hooks_for};

// The traits adapters implement.
pub use ports::{
    CommandRunner, ConfigSource, Environment, Filesystem, TemplateRenderer, TreeComposer,
};

pub use error::ApplicationError;
