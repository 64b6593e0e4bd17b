//! The `chassis` binary.
//!
//! Startup is linear: `.env`, argument parsing, tracing, CLI config, output
//! manager, then dispatch into `commands::*`. Anything a handler returns as
//! [`CliError`] is rendered once, at the bottom of `main`, and mapped onto
//! the process exit status:
//!
//! | Code | Meaning                      |
//! |------|------------------------------|
//! |  0   | Success                      |
//! |  1   | Any reported failure         |
//! |  2   | Usage error (bad arguments)  |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::CliConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A local .env can hold CHASSIS_HOME or ANDROID_HOME during development;
    // its absence is not an error.
    let _ = dotenvy::dotenv();

    // clap models --help and --version as errors too. Those print to stdout
    // and exit zero; genuine argument mistakes go to stderr with exit 2.
    let cli = match Cli::try_parse() {
        Ok(parsed) => parsed,
        Err(parse_err) => {
            let _ = parse_err.print();
            return if parse_err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            };
        }
    };
    let verbose = cli.global.verbose > 0;

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("chassis: cannot set up logging: {e}");
        return ExitCode::from(1);
    }
    let flags = &cli.global;
    debug!(
        verbose = flags.verbose,
        quiet = flags.quiet,
        no_color = flags.no_color,
        "chassis starting"
    );

    // A broken CLI config file is reported through the same path as command
    // failures so it gets the suggestion machinery.
    let config = match CliConfig::load(cli.global.config.as_ref()) {
        Ok(loaded) => loaded,
        Err(load_err) => {
            let err = CliError::ConfigError {
                message: format!("{load_err:#}"),
                source: None,
            };
            return handle_error(err, verbose);
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("chassis finished");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Route the parsed command to its handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: CliConfig, output: OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;
    match command {
        Commands::Init(args) => commands::init::execute(args, global, config, output),
        Commands::Setup(args) => commands::setup::execute(args, global, config, output),
        Commands::Build(args) => commands::build::execute(args, global, config, output),
        Commands::Install(args) => commands::install::execute(args, global, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// The one spot where a structured error becomes user output.
///
/// Logs the error at its own severity, writes the formatted report to
/// stderr (colored only on a terminal), and picks the exit status.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    let report = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{report}");

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // debug_assert covers conflicting flags, missing value names, and the
    // rest of clap's static checks.
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_comes_from_cargo_metadata() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }
}
