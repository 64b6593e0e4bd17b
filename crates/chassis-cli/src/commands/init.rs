//! `chassis init` - scaffold a new project.

use tracing::{info, instrument};

use chassis_adapters::{LocalFilesystem, MinijinjaRenderer, WalkdirComposer};
use chassis_core::application::InitService;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::CliConfig,
    error::CliResult,
    output::OutputManager,
};

use super::resolve_framework;

/// Copy the framework's starter project into the target directory.
#[instrument(skip_all, fields(target = %args.path.display()))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: CliConfig,
    output: OutputManager,
) -> CliResult<()> {
    let framework = resolve_framework(&global, &config)?;

    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(WalkdirComposer::new(Box::new(MinijinjaRenderer::new()))),
        framework,
    );

    let report = service.init(&args.path)?;
    info!(files = report.written(), "project scaffolded");

    if report.written() == 0 {
        output.warning("Framework scaffold is empty, nothing was written")?;
    }
    output.success(&format!(
        "Project scaffolded at {} ({} files)",
        args.path.display(),
        report.written()
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print("  1. Edit app.yaml")?;
    output.print("  2. chassis setup <platform>")?;

    Ok(())
}
