//! Failures raised while driving the pipeline: port I/O, template
//! expansion, external commands. Problems with the project description
//! itself are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the pipeline through the ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A read or write through the filesystem port failed.
    #[error("Filesystem operation on {path} failed: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The renderer rejected a template or its context.
    #[error("Template rendering failed: {reason}")]
    RenderFailed { reason: String },

    /// App config file exists but could not be parsed.
    #[error("Cannot parse {path}: {reason}")]
    ConfigUnreadable { path: PathBuf, reason: String },

    /// External command binary was not found.
    #[error("Command '{program}' not found")]
    CommandNotFound { program: String },

    /// External command ran and reported failure.
    #[error("Command '{program}' exited with status {code}")]
    CommandFailed { program: String, code: i32 },

    /// External command was killed before reporting a status.
    #[error("Command '{program}' was terminated by a signal")]
    CommandTerminated { program: String },

    /// In-memory filesystem state poisoned (test doubles only).
    #[error("Filesystem state lock poisoned")]
    StateLockPoisoned,
}

impl ApplicationError {
    /// Remediation hints, keyed to the failure.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Check permissions on {}", path.display()),
                "Create the parent directory if it is missing".into(),
            ],
            Self::RenderFailed { reason } => vec![
                format!("Rendering failed: {}", reason),
                "A template references a variable the context does not provide".into(),
            ],
            Self::ConfigUnreadable { path, .. } => vec![
                format!("Fix the syntax in {}", path.display()),
            ],
            Self::CommandFailed { program, code } => vec![
                format!("{} reported failure (exit status {})", program, code),
                "Its output above has the details".into(),
            ],
            Self::CommandNotFound { program } => vec![
                format!("Install {} and make sure it is on PATH", program),
            ],
            _ => vec!["See the error text above for specifics".into()],
        }
    }

    /// Coarse grouping used by exit reporting.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandFailed { .. } | Self::CommandTerminated { .. } => ErrorCategory::Build,
            Self::CommandNotFound { .. } => ErrorCategory::Environment,
            Self::FilesystemError { .. }
            | Self::RenderFailed { .. }
            | Self::ConfigUnreadable { .. }
            | Self::StateLockPoisoned => ErrorCategory::Internal,
        }
    }
}
