//! What a chassis project *is*: app config, versions, layouts, merge rules.
//!
//! Nothing here touches a disk or spawns a process. Every type is a plain
//! value (Clone + PartialEq, no async), validated on construction or through
//! an explicit `validate` call, so the application layer can sequence builds
//! without re-checking inputs. Dependencies stop at serde and thiserror.

pub mod config;
pub mod context;
pub mod error;
pub mod layout;
pub mod merge;
pub mod platform;
pub mod version;

pub use config::{AppConfig, REQUIRED_FIELDS};
pub use context::TemplateContext;
pub use error::{DomainError, ErrorCategory};
pub use layout::{CONFIG_FILE_NAME, FrameworkLayout, ProjectLayout};
pub use merge::{MergeReport, MergeSpec, PathFilter, TEMPLATE_EXTENSION};
pub use platform::Platform;
pub use version::{SemanticVersion, compare_versions};
