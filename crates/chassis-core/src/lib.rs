//! Domain and application layers of the chassis build orchestrator.
//!
//! This crate is pure: no filesystem access, no environment reads, no
//! subprocesses. Everything effectful enters through the port traits in
//! [`application::ports`], implemented by `chassis-adapters` in production
//! and by mocks or in-memory fakes in tests.
//!
//! Layering, outermost first:
//!
//! ```text
//! chassis-cli        clap surface, output manager, exit codes
//!   └─ application   BuildOrchestrator, InitService, hook registry, ports
//!        └─ domain   AppConfig, SemanticVersion, MergeSpec, Platform, layouts
//! ```
//!
//! A binary wires adapters into the orchestrator and runs one lifecycle
//! operation per platform:
//!
//! ```rust,ignore
//! use chassis_core::{
//!     application::BuildOrchestrator,
//!     domain::{FrameworkLayout, Platform, ProjectLayout},
//! };
//!
//! let orchestrator = BuildOrchestrator::new(
//!     config_source, filesystem, environment, composer, runner,
//!     FrameworkLayout::new("/opt/chassis"),
//!     ProjectLayout::new(std::env::current_dir()?),
//! );
//! let outcome = orchestrator.setup(Platform::Android)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

/// One-stop imports for the binary and adapter crates.
pub mod prelude {
    pub use crate::application::{
        BuildOrchestrator, InitService, SetupOutcome,
        ports::{
            CommandRunner, ConfigSource, Environment, Filesystem, TemplateRenderer, TreeComposer,
        },
    };
    pub use crate::domain::{
        AppConfig, FrameworkLayout, MergeReport, MergeSpec, Platform, ProjectLayout,
        TemplateContext,
    };
    pub use crate::error::{ChassisError, ChassisResult};
}

/// Crate version, surfaced for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
