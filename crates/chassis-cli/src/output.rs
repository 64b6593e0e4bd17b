//! Terminal output for command progress and results.
//!
//! Progress lines go through [`OutputManager`] to stdout; diagnostics come
//! from `tracing` and land on stderr, and fatal errors are formatted by
//! [`crate::error::CliError`]. Machine payloads bypass quiet suppression so
//! `--output-format json` always yields a parseable document.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::CliConfig;

/// Glyph and palette for one kind of progress line.
enum Tone {
    Success,
    Warning,
    Info,
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &CliConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            chosen => chosen,
        };
        // Only the human format carries ANSI codes; plain and json strip
        // them even without --no-color.
        let color =
            format == OutputFormat::Human && !args.no_color && !config.output.no_color;
        Self {
            format,
            quiet: args.quiet,
            color,
            term: Term::stdout(),
        }
    }

    /// The resolved format. `Auto` never escapes the constructor.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Unadorned line, dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Section header announcing one platform's pipeline.
    pub fn header(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.color {
            msg.cyan().bold().to_string()
        } else {
            msg.to_owned()
        };
        self.term.write_line(&line)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.stamped(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.stamped(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.stamped(Tone::Info, msg)
    }

    /// Machine-readable result document. Neither quieted nor colored: a
    /// caller asking for json wants the bytes even under `--quiet`.
    pub fn payload(&self, document: &str) -> io::Result<()> {
        self.term.write_line(document)
    }

    fn stamped(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match (tone, self.color) {
            (Tone::Success, true) => format!("{} {}", "✓".green().bold(), msg.green()),
            (Tone::Success, false) => format!("✓ {msg}"),
            (Tone::Warning, true) => format!("{} {}", "⚠".yellow().bold(), msg.yellow()),
            (Tone::Warning, false) => format!("⚠ {msg}"),
            (Tone::Info, true) => format!("{} {}", "ℹ".blue().bold(), msg.blue()),
            (Tone::Info, false) => format!("ℹ {msg}"),
        };
        self.term.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            framework_root: None,
            output_format: format,
        };
        OutputManager::new(&args, &CliConfig::default())
    }

    #[test]
    fn auto_resolves_to_a_concrete_format() {
        let out = manager(OutputFormat::Auto, false, false);
        assert_ne!(out.format(), OutputFormat::Auto);
    }

    #[test]
    fn plain_strips_color_without_the_flag() {
        assert!(!manager(OutputFormat::Plain, false, false).color);
        assert!(!manager(OutputFormat::Json, false, false).color);
    }

    #[test]
    fn human_keeps_color_until_opted_out() {
        assert!(manager(OutputFormat::Human, false, false).color);
        assert!(!manager(OutputFormat::Human, false, true).color);
    }

    #[test]
    fn config_file_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            framework_root: None,
            output_format: OutputFormat::Human,
        };
        let mut config = CliConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).color);
    }

    // Writes in quiet mode must stay Ok: suppressed lines are skipped, not
    // reported as failures, and payloads still go out.
    #[test]
    fn quiet_drops_progress_but_not_payload() {
        let out = manager(OutputFormat::Plain, true, true);
        assert!(out.print("skipped").is_ok());
        assert!(out.success("skipped").is_ok());
        assert!(out.payload("{\"ok\":true}").is_ok());
    }
}
