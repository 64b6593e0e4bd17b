//! `chassis build` - assemble and compile.

use tracing::{info, instrument};

use chassis_core::error::Context as _;

use crate::{
    cli::{GlobalArgs, OutputFormat, PlatformArgs},
    config::CliConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{build_orchestrator, current_project, resolve_framework, resolve_platforms};

/// Set up each platform's build tree, then hand over to its build tool.
///
/// The tool's own output streams straight through; on a non-zero exit the
/// pipeline stops with that platform's failure.
#[instrument(skip_all)]
pub fn execute(
    args: PlatformArgs,
    global: GlobalArgs,
    config: CliConfig,
    output: OutputManager,
) -> CliResult<()> {
    let framework = resolve_framework(&global, &config)?;
    let project = current_project()?;
    let orchestrator = build_orchestrator(framework, project);

    let json = output.format() == OutputFormat::Json;
    let mut outcomes = Vec::new();

    for platform in resolve_platforms(&args.platforms) {
        if !json {
            output.header(&format!("Building {platform}"))?;
        }

        let outcome = orchestrator.build(platform)?;
        info!(platform = %platform, "build complete");

        if !json {
            output.success(&format!("{platform} build complete"))?;
        }
        outcomes.push(outcome);
    }

    if json {
        let payload =
            serde_json::to_string_pretty(&outcomes).context("serialise build results")?;
        output.payload(&payload)?;
    }

    Ok(())
}
