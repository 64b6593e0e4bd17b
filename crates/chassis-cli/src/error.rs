//! CLI-side error type and its presentation.
//!
//! [`CliError`] wraps the pipeline's [`ChassisError`] and adds the two
//! failure modes only the binary can hit (its own config file, stray I/O).
//! Presentation follows the error's nature: operator-fixable problems print
//! as a bare `Error:` line with suggestions, everything else offers the
//! diagnostic chain behind `--verbose`.

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use chassis_core::error::ChassisError;

// Aliased to keep the two category enums apart in `category()` below.
pub use chassis_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from the pipeline.
    ///
    /// Displayed bare: the core message is already the full user-facing
    /// sentence, and the `Error:` prefix is added by the formatter so the
    /// operator-facing contract stays `Error: <message>` on one line.
    #[error("{0}")]
    Core(#[from] ChassisError),

    /// The CLI's own configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O operation failed outside the pipeline.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Actionable fixes, shown under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core) => core.suggestions(),

            Self::ConfigError { .. } => vec![
                "Check config.toml in your chassis config directory".into(),
                "Pass --config <FILE> to use a different file".into(),
            ],

            Self::IoError { .. } => vec![
                "Check permissions and free space on the output path".into(),
            ],
        }
    }

    /// Grouping for log levels and styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Environment => ErrorCategory::UserError,
                CoreCategory::Build => ErrorCategory::Build,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// What the process should exit with.
    ///
    /// Usage errors exit 2 through clap before a `CliError` ever exists;
    /// every structured failure maps to 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// `true` when the one-line message alone is the right report and the
    /// diagnostic chain would only be noise.
    fn is_operator_facing(&self) -> bool {
        matches!(self, Self::Core(core) if core.is_recoverable())
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    /// Shared body of the two formatters.
    ///
    /// Layout: headline, then the source chain under `--verbose`, then
    /// suggestions, then (for non-operator errors without `--verbose`) a
    /// pointer at the flag that would have shown the chain.
    fn render(&self, verbose: bool, color: bool) -> String {
        let mut out = String::new();

        let headline = format!("Error: {self}");
        if color {
            out.push_str(&format!("{} {}\n", "✗".red().bold(), headline.red()));
        } else {
            out.push_str(&headline);
            out.push('\n');
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                if color {
                    out.push_str(&format!("  {} {}\n", "→".dimmed(), err.to_string().dimmed()));
                } else {
                    out.push_str(&format!("  Caused by: {err}\n"));
                }
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            if color {
                out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            } else {
                out.push_str("\nSuggestions:\n");
            }
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose && !self.is_operator_facing() {
            let hint = "Use -v / --verbose for more details.";
            if color {
                out.push_str(&format!("\n{} {}\n", "ℹ".blue(), hint.dimmed()));
            } else {
                out.push_str(&format!("\n{hint}\n"));
            }
        }

        out
    }

    /// Emit the failure into the log stream at a severity matching its
    /// category, with the immediate cause at debug.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("operator error: {}", self),
            ErrorCategory::Build => tracing::error!("build tool failed: {}", self),
            ErrorCategory::Configuration => tracing::error!("cli config rejected: {}", self),
            ErrorCategory::Internal => tracing::error!("internal failure: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("caused by: {}", source);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The operator's input or environment needs fixing.
    UserError,
    /// An external build tool reported failure.
    Build,
    /// The CLI's own configuration is broken.
    Configuration,
    /// Everything a bug report should carry.
    Internal,
}
