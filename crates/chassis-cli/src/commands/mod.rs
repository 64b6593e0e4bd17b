//! Command handlers.
//!
//! Each submodule owns one subcommand: translate CLI arguments, wire the
//! production adapters into the core services, run, and report.  No
//! pipeline logic lives here.

pub mod build;
pub mod completions;
pub mod init;
pub mod install;
pub mod setup;

use std::path::PathBuf;

use chassis_adapters::{
    LocalFilesystem, MinijinjaRenderer, ProcessRunner, SystemEnvironment, WalkdirComposer,
    YamlConfigSource, resolve_framework_root,
};
use chassis_core::application::BuildOrchestrator;
use chassis_core::domain::{FrameworkLayout, Platform, ProjectLayout};

use crate::cli::{GlobalArgs, PlatformArg};
use crate::config::CliConfig;
use crate::error::CliResult;

/// Expand the requested platform list.
///
/// `all` anywhere in the list replaces the whole request with every
/// supported platform; otherwise the literal order is kept, duplicates
/// included, so `chassis setup android android` really does run twice.
pub(crate) fn resolve_platforms(requested: &[PlatformArg]) -> Vec<Platform> {
    if requested.iter().any(|p| matches!(p, PlatformArg::All)) {
        return Platform::ALL.to_vec();
    }
    requested.iter().filter_map(|p| p.to_platform()).collect()
}

/// Locate the framework distribution from flags, environment, and config.
pub(crate) fn resolve_framework(
    global: &GlobalArgs,
    config: &CliConfig,
) -> CliResult<FrameworkLayout> {
    let layout = resolve_framework_root(
        global.framework_root.as_deref(),
        config.framework_root.as_deref(),
    )?;
    Ok(layout)
}

/// The project the command runs against is always the working directory.
pub(crate) fn current_project() -> CliResult<ProjectLayout> {
    let cwd: PathBuf = std::env::current_dir()?;
    Ok(ProjectLayout::new(cwd))
}

/// Wire the production adapters into the pipeline service.
pub(crate) fn build_orchestrator(
    framework: FrameworkLayout,
    project: ProjectLayout,
) -> BuildOrchestrator {
    BuildOrchestrator::new(
        Box::new(YamlConfigSource::for_project(&project)),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemEnvironment::new()),
        Box::new(WalkdirComposer::new(Box::new(MinijinjaRenderer::new()))),
        Box::new(ProcessRunner::new()),
        framework,
        project,
    )
}
