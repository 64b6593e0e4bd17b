//! `chassis setup` - assemble platform build trees.

use tracing::{info, instrument};

use chassis_core::error::Context as _;

use crate::{
    cli::{GlobalArgs, OutputFormat, PlatformArgs},
    config::CliConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{build_orchestrator, current_project, resolve_framework, resolve_platforms};

/// Run the composition pipeline for each requested platform.
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
            output.header(&format!("Setting up {platform}"))?;
        }

        let outcome = orchestrator.setup(platform)?;
        info!(
            platform = %platform,
            written = outcome.report.written(),
            "setup complete"
        );

        if !json {
            // The hook-resolved SDK pieces, when the platform has any.
            if let Some(section) = outcome.config.platform_section(platform) {
                if let Some(tools) = section.get("build_tools").and_then(|v| v.as_str()) {
                    output.info(&format!("build-tools {tools}"))?;
                }
                if let Some(target) = section.get("target").and_then(|v| v.as_u64()) {
                    output.info(&format!("target {target}"))?;
                }
            }
            output.success(&format!(
                "{platform}: {} rendered, {} copied, {} up to date",
                outcome.report.rendered, outcome.report.copied, outcome.report.up_to_date
            ))?;
        }
        outcomes.push(outcome);
    }

    if json {
        let payload =
            serde_json::to_string_pretty(&outcomes).context("serialise setup results")?;
        output.payload(&payload)?;
    }

    Ok(())
}
