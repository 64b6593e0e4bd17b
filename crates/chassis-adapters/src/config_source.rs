//! App config loading.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use chassis_core::application::ApplicationError;
use chassis_core::application::ports::ConfigSource;
use chassis_core::domain::{AppConfig, DomainError, ProjectLayout};
use chassis_core::error::ChassisResult;

/// Loads `app.yaml` from a fixed path.
///
/// A missing file is a user-facing condition ([`DomainError::ConfigMissing`]),
/// while unreadable or malformed YAML is reported as an application failure
/// with the parser's own message attached.
#[derive(Debug, Clone)]
pub struct YamlConfigSource {
    path: PathBuf,
}

impl YamlConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Point at the conventional config file of a project.
    pub fn for_project(project: &ProjectLayout) -> Self {
        Self::new(project.config_file())
    }
}

impl ConfigSource for YamlConfigSource {
    fn load(&self) -> ChassisResult<AppConfig> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(DomainError::ConfigMissing.into());
            }
            Err(err) => {
                return Err(ApplicationError::FilesystemError {
                    path: self.path.clone(),
                    reason: err.to_string(),
                }
                .into());
            }
        };

        let config: AppConfig =
            serde_yaml::from_str(&raw).map_err(|err| ApplicationError::ConfigUnreadable {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        debug!(path = %self.path.display(), "loaded app config");
        Ok(config)
    }
}
