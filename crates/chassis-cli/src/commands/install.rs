//! `chassis install` - assemble, compile, and deploy to a device.

use tracing::{info, instrument};

use chassis_core::error::Context as _;

use crate::{
    cli::{GlobalArgs, OutputFormat, PlatformArgs},
    config::CliConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{build_orchestrator, current_project, resolve_framework, resolve_platforms};

/// Set up each platform's build tree, then run its install hook.
///
/// Platforms without an install hook (currently ios) still get their
/// build tree assembled; deployment is handled by the platform's own IDE
/// tooling there.
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
            output.header(&format!("Installing {platform}"))?;
        }

        let outcome = orchestrator.install(platform)?;
        info!(platform = %platform, "install complete");

        if !json {
            output.success(&format!("{platform} installed"))?;
        }
        outcomes.push(outcome);
    }

    if json {
        let payload =
            serde_json::to_string_pretty(&outcomes).context("serialise install results")?;
        output.payload(&payload)?;
    }

    Ok(())
}
