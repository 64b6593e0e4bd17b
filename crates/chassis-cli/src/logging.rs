//! Tracing subscriber setup.
//!
//! The binary installs one subscriber at startup; the library crates only
//! emit events. Diagnostics go to stderr so `--output-format json` keeps a
//! clean stdout. `RUST_LOG` takes precedence over the verbosity flags;
//! without it, `--quiet` filters to errors and each `-v` steps the chassis
//! crates from warn up through info, debug, and trace.

use std::io::IsTerminal as _;

use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the process-wide subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| chassis_filter(verbosity(args)));

    // Color only when stderr is a real terminal and nobody opted out.
    let ansi = std::io::stderr().is_terminal() && !args.no_color;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    // A second install attempt (unit tests sharing a process) surfaces as an
    // error here rather than a panic.
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// Filter covering the three chassis crates at one shared level.
fn chassis_filter(level: Level) -> EnvFilter {
    EnvFilter::new(format!(
        "chassis={level},chassis_core={level},chassis_adapters={level}"
    ))
}

fn verbosity(args: &GlobalArgs) -> Level {
    if args.quiet {
        return Level::ERROR;
    }
    match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            framework_root: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn each_v_steps_the_level() {
        assert_eq!(verbosity(&args(0, false)), Level::WARN);
        assert_eq!(verbosity(&args(1, false)), Level::INFO);
        assert_eq!(verbosity(&args(2, false)), Level::DEBUG);
        assert_eq!(verbosity(&args(3, false)), Level::TRACE);
        assert_eq!(verbosity(&args(9, false)), Level::TRACE);
    }

    #[test]
    fn quiet_filters_to_errors_even_with_verbose() {
        assert_eq!(verbosity(&args(0, true)), Level::ERROR);
        assert_eq!(verbosity(&args(3, true)), Level::ERROR);
    }

    #[test]
    fn filter_directives_cover_all_three_crates() {
        let rendered = chassis_filter(Level::DEBUG).to_string();
        assert!(rendered.contains("chassis_core=debug"));
        assert!(rendered.contains("chassis_adapters=debug"));
    }
}
