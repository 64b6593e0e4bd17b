//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `chassis setup -v`
//! and `chassis -v setup` both work.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    ///
    /// One `-v` shows progress (merge reports, chosen SDK pieces), `-vv`
    /// adds per-file composition detail, `-vvv` traces everything.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    ///
    /// Errors and machine payloads still print.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    ///
    /// Also switched off by the `NO_COLOR` convention
    /// (<https://no-color.org>), and by the `auto` output format when
    /// stdout is not a terminal.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file path
    ///
    /// Defaults to `config.toml` in the platform's chassis config
    /// directory.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Chassis framework distribution root
    ///
    /// Overrides `$CHASSIS_HOME` and the config file. The directory must
    /// hold the framework's `core/` and `platform/` trees.
    #[arg(long, global = true, value_name = "DIR")]
    pub framework_root: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

/// Rendering mode for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colors on a terminal, plain text in a pipe.
    #[default]
    Auto,
    /// Glyphs and colors regardless of the target.
    Human,
    /// Glyphs without colors.
    Plain,
    /// One serde_json document per command on stdout.
    Json,
}
