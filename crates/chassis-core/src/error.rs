//! Crate-level error type.
//!
//! [`ChassisError`] folds the two layer errors into one surface so callers
//! hold a single `Result` alias. The split between its variants carries
//! meaning: [`DomainError`] is operator-fixable and prints as one line,
//! while application and internal failures keep their diagnostic chain.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChassisError {
    /// A configuration or environment rule was broken.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The pipeline itself failed (filesystem, render, subprocess).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A condition no operator input should be able to produce.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ChassisError {
    /// Actionable fixes, in display order.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This looks like a chassis bug".into(),
                "Please file an issue with the full output above".into(),
            ],
        }
    }

    /// Coarse grouping for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the operator can fix this without touching chassis itself.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
    Build,
    Internal,
}

impl From<crate::domain::ErrorCategory> for ErrorCategory {
    fn from(category: crate::domain::ErrorCategory) -> Self {
        match category {
            crate::domain::ErrorCategory::Validation => Self::Validation,
            crate::domain::ErrorCategory::Environment => Self::Environment,
        }
    }
}

pub type ChassisResult<T> = Result<T, ChassisError>;

/// Wrap any error into [`ChassisError::Internal`] with a prefix.
///
/// The core equivalent of `anyhow::Context`, for the places where a failure
/// has no recoverable meaning and only the chain matters.
pub trait Context<T> {
    fn context(self, msg: impl Into<String>) -> ChassisResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> ChassisResult<T> {
        self.map_err(|e| {
            let prefix = msg.into();
            ChassisError::Internal {
                message: format!("{prefix}: {e}"),
            }
        })
    }
}
