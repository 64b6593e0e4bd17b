//! CLI configuration.
//!
//! [`CliConfig`] is loaded once at startup and passed down by value.  This
//! is the tool's own configuration (framework location, output defaults),
//! not the project's `app.yaml` - that one belongs to the core pipeline.
//!
//! Precedence, strongest first: CLI flags (applied where they are read,
//! not here), `CHASSIS_*` environment variables, the config file
//! (`--config` or the default location), built-in defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tool-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Framework distribution root, consulted after `--framework-root`
    /// and `$CHASSIS_HOME`.
    pub framework_root: Option<PathBuf>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Disable colors regardless of terminal detection.
    pub no_color: bool,
}

impl CliConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.  Environment variables use the `CHASSIS_` prefix with
    /// `__` as the nesting separator, e.g. `CHASSIS_OUTPUT__NO_COLOR=1`.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.clone()).required(true));
            }
            None => {
                builder =
                    builder.add_source(config::File::from(Self::config_path()).required(false));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CHASSIS")
                .prefix_separator("_")
                .separator("__")
                .ignore_empty(true),
        );

        let settings = builder.build()?;
        let config = settings.try_deserialize::<CliConfig>()?;
        Ok(config)
    }

    /// Where the config file lives when `--config` is not given.
    ///
    /// Resolved through `directories::ProjectDirs` per platform, with
    /// `.chassis.toml` in the current directory as the fallback.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "chassis-build", "chassis")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".chassis.toml"))
    }
}
