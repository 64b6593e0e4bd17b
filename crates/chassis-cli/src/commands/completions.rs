//! `chassis completions` - emit a shell completion script on stdout.

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs, Shell};

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(target(args.shell), &mut cmd, "chassis", &mut std::io::stdout());
    Ok(())
}

/// Map the CLI's shell choice onto clap_complete's generator.
fn target(shell: Shell) -> clap_complete::Shell {
    match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    }
}
