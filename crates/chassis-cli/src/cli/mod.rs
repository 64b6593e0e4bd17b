//! The clap surface: every flag name, subcommand, and help string the user
//! can type lives in this module and nowhere else.  Handlers in
//! `crate::commands` receive the parsed structs and never touch clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use chassis_core::domain::Platform;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── chassis ───────────────────────────────────────────────────────────────────

/// The parsed command line.
#[derive(Debug, Parser)]
#[command(
    name    = "chassis",
    bin_name = "chassis",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f6e0} One project description, per-platform build trees",
    long_about = "Chassis assembles per-platform build trees for a cross-platform \
                  app project: framework core, project components, and platform \
                  support code merge into build/<platform>, then the platform's \
                  own tool takes over.",
    after_help = "EXAMPLES:\n\
        \x20 chassis init my-app\n\
        \x20 chassis setup android\n\
        \x20 chassis build android ios\n\
        \x20 chassis install android\n\
        \x20 chassis completions bash > /usr/share/bash-completion/completions/chassis",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Global flags, accepted before or after the subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

// ── subcommands ───────────────────────────────────────────────────────────────

/// One variant per `chassis <verb>`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start a new project from the framework scaffold.
    #[command(
        about = "Start a new project",
        after_help = "EXAMPLES:\n\
            \x20 chassis init            # scaffold into the current directory\n\
            \x20 chassis init my-app     # scaffold into ./my-app"
    )]
    Init(InitArgs),

    /// Assemble the build tree for one or more platforms.
    #[command(
        about = "Assemble platform build trees",
        after_help = "EXAMPLES:\n\
            \x20 chassis setup android\n\
            \x20 chassis setup android ios\n\
            \x20 chassis setup all"
    )]
    Setup(PlatformArgs),

    /// Assemble the build tree, then run the platform build.
    #[command(
        about = "Build for one or more platforms",
        after_help = "EXAMPLES:\n\
            \x20 chassis build android\n\
            \x20 chassis build all"
    )]
    Build(PlatformArgs),

    /// Assemble the build tree, then deploy to a connected device.
    #[command(
        about = "Build and install on a device",
        after_help = "EXAMPLES:\n\
            \x20 chassis install android"
    )]
    Install(PlatformArgs),

    /// Emit a completion script for the chosen shell.
    #[command(
        about = "Emit shell completion scripts",
        after_help = "EXAMPLES:\n\
            \x20 chassis completions bash > ~/.local/share/bash-completion/completions/chassis\n\
            \x20 chassis completions zsh  > ~/.zfunc/_chassis\n\
            \x20 chassis completions fish > ~/.config/fish/completions/chassis.fish"
    )]
    Completions(CompletionsArgs),
}

// ── chassis init ──────────────────────────────────────────────────────────────

/// Arguments for `chassis init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to put the new project.  The directory is created if missing
    /// and must be empty if it exists.
    #[arg(value_name = "DIR", default_value = ".", help = "Project directory")]
    pub path: PathBuf,
}

// ── platform verbs ────────────────────────────────────────────────────────────

/// Platform selection shared by `setup`, `build`, and `install`.
#[derive(Debug, Args)]
pub struct PlatformArgs {
    /// Platforms to process, in order.  `all` expands to every supported
    /// platform.
    #[arg(
        value_name = "PLATFORM",
        value_enum,
        required = true,
        num_args = 1..,
        help = "Target platform(s), or 'all'"
    )]
    pub platforms: Vec<PlatformArg>,
}

/// A platform name as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PlatformArg {
    /// Every supported platform.
    All,
    Android,
    Ios,
}

impl PlatformArg {
    /// The concrete platform, or `None` for the `all` sentinel.
    pub fn to_platform(self) -> Option<Platform> {
        match self {
            PlatformArg::All => None,
            PlatformArg::Android => Some(Platform::Android),
            PlatformArg::Ios => Some(Platform::Ios),
        }
    }
}

impl std::fmt::Display for PlatformArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
        }
    }
}

// ── chassis completions ───────────────────────────────────────────────────────

/// Arguments for `chassis completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Which shell dialect to emit.
    #[arg(value_enum, help = "Shell the script is for")]
    pub shell: Shell,
}

/// Shells we can emit completion scripts for.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── parser tests ──────────────────────────────────────────────────────────────
