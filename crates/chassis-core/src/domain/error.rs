//! Operator-fixable failures, with the exact wording the fixes key off.

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// Every variant here is something the operator can fix without touching
/// chassis itself: a config key, an environment variable, an SDK install.
/// The CLI prints these as a single `Error:` line and exits with status 1.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // app config
    #[error("Cannot find app.yaml")]
    ConfigMissing,

    #[error("App config missing fields: {}", .fields.join(", "))]
    MissingRequiredFields { fields: Vec<&'static str> },

    #[error("Platform section '{platform}' in app config is not a map")]
    PlatformSectionInvalid { platform: String },

    // versions
    #[error("Version in app config not in semantic format")]
    VersionNotSemantic,

    #[error("Version {component} in app config must be < 100")]
    VersionComponentTooLarge { component: &'static str },

    // environment and toolchain
    #[error("{var} not defined")]
    EnvVarNotDefined { var: &'static str },

    #[error("{var} ({}) does not exist", .path.display())]
    EnvPathMissing { var: &'static str, path: PathBuf },

    #[error("No build-tools installed")]
    NoBuildTools,

    #[error("No platform targets installed")]
    NoPlatformTargets,

    #[error("{tool} not installed")]
    ToolNotInstalled { tool: &'static str },

    #[error("Cannot find chassis framework root")]
    FrameworkRootNotFound,

    // workspace
    #[error("Path is not a folder")]
    TargetNotFolder { path: PathBuf },

    #[error("Folder is not empty")]
    TargetNotEmpty { path: PathBuf },

    #[error("Unknown platform: {name}")]
    UnknownPlatform { name: String },
}

impl DomainError {
    /// What the operator should try, one string per line of advice.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigMissing => vec![
                "Run chassis from your project root (the directory holding app.yaml)".into(),
                "Or create a new project: chassis init <path>".into(),
            ],
            Self::MissingRequiredFields { fields } => vec![
                format!("Add the missing keys to app.yaml: {}", fields.join(", ")),
                "Every project needs name, id, launch, and version".into(),
            ],
            Self::PlatformSectionInvalid { platform } => vec![
                format!("Make the '{platform}' section in app.yaml a mapping of keys to values"),
            ],
            Self::VersionNotSemantic => vec![
                "Use a version like 1.2.3 or 1.2.3-rc4 in app.yaml".into(),
            ],
            Self::VersionComponentTooLarge { component } => vec![
                format!("Keep the {} component below 100", component),
                "The packed version number allots two decimal digits per component".into(),
            ],
            Self::EnvVarNotDefined { var } => vec![
                format!("Export {} before running chassis", var),
                "It must point at your installed SDK".into(),
            ],
            Self::EnvPathMissing { var, path } => vec![
                format!("{} points at {}, which does not exist", var, path.display()),
                "Fix the variable or reinstall the SDK".into(),
            ],
            Self::NoBuildTools => vec![
                "Install at least one build-tools package via sdkmanager".into(),
            ],
            Self::NoPlatformTargets => vec![
                "Install at least one platform target via sdkmanager".into(),
                "Or pin an installed one as 'target' in the android section of app.yaml".into(),
            ],
            Self::ToolNotInstalled { tool } => vec![
                format!("Install {} and make sure it is on PATH", tool),
            ],
            Self::FrameworkRootNotFound => vec![
                "Set CHASSIS_HOME to your chassis distribution directory".into(),
                "It must contain the core/ and platform/ trees".into(),
            ],
            Self::TargetNotFolder { path } => vec![
                format!("{} exists and is not a directory", path.display()),
                "Pick a different path for the new project".into(),
            ],
            Self::TargetNotEmpty { path } => vec![
                format!("{} already has contents", path.display()),
                "chassis init only fills empty or new directories".into(),
            ],
            Self::UnknownPlatform { .. } => vec![
                "Platforms chassis knows: android, ios".into(),
            ],
        }
    }

    /// How the CLI should style and group the report.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMissing
            | Self::MissingRequiredFields { .. }
            | Self::PlatformSectionInvalid { .. }
            | Self::VersionNotSemantic
            | Self::VersionComponentTooLarge { .. }
            | Self::TargetNotFolder { .. }
            | Self::TargetNotEmpty { .. }
            | Self::UnknownPlatform { .. } => ErrorCategory::Validation,
            Self::EnvVarNotDefined { .. }
            | Self::EnvPathMissing { .. }
            | Self::NoBuildTools
            | Self::NoPlatformTargets
            | Self::ToolNotInstalled { .. }
            | Self::FrameworkRootNotFound => ErrorCategory::Environment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Environment,
}
