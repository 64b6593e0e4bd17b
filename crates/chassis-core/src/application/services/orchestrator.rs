//! The pipeline behind `chassis setup`, `build`, and `install`.
//!
//! A run walks six stages in order:
//! 1. Load and validate the app config
//! 2. Run the platform setup hook
//! 3. Merge the source trees into the build directory
//! 4. Discover native modules
//! 5. Render the platform build templates
//! 6. Hand off to the platform build tool (build/install only)
//!
//! Everything effectful happens behind the driven ports the orchestrator
//! owns. The sequence never branches back: any failed stage aborts the
//! rest and leaves already-written files in place, which the incremental
//! copy policy makes safe to re-run.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::hooks::hooks_for,
    application::ports::{CommandRunner, ConfigSource, Environment, Filesystem, TreeComposer},
    domain::{
        AppConfig, FrameworkLayout, MergeReport, MergeSpec, Platform, ProjectLayout,
        TemplateContext,
    },
    error::ChassisResult,
};

/// What a completed setup produced, for display and machine output.
#[derive(Debug, Clone, Serialize)]
pub struct SetupOutcome {
    pub platform: Platform,
    pub build_dir: PathBuf,
    pub report: MergeReport,
    pub native_modules: Vec<String>,
    /// The config as the pipeline left it, platform section included.
    pub config: AppConfig,
}

/// Main build pipeline service.
///
/// Owns the driven ports plus the two tree layouts, and runs the fixed
/// setup/build/install sequences over them.
pub struct BuildOrchestrator {
    config_source: Box<dyn ConfigSource>,
    filesystem: Box<dyn Filesystem>,
    environment: Box<dyn Environment>,
    composer: Box<dyn TreeComposer>,
    runner: Box<dyn CommandRunner>,
    framework: FrameworkLayout,
    project: ProjectLayout,
}

impl BuildOrchestrator {
    /// Create a new orchestrator with the given adapters and layouts.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use chassis_core::application::BuildOrchestrator;
    ///
    /// let orchestrator = BuildOrchestrator::new(
    ///     config_source, // impl ConfigSource
    ///     filesystem,    // impl Filesystem
    ///     environment,   // impl Environment
    ///     composer,      // impl TreeComposer
    ///     runner,        // impl CommandRunner
    ///     framework,     // FrameworkLayout
    ///     project,       // ProjectLayout
    /// );
    /// ```
    pub fn new(
        config_source: Box<dyn ConfigSource>,
        filesystem: Box<dyn Filesystem>,
        environment: Box<dyn Environment>,
        composer: Box<dyn TreeComposer>,
        runner: Box<dyn CommandRunner>,
        framework: FrameworkLayout,
        project: ProjectLayout,
    ) -> Self {
        Self {
            config_source,
            filesystem,
            environment,
            composer,
            runner,
            framework,
            project,
        }
    }

    /// Assemble the platform's build tree.
    ///
    /// Runs stages 1 through 5; `build` and `install` call it first.
    #[instrument(skip_all, fields(platform = %platform))]
    pub fn setup(&self, platform: Platform) -> ChassisResult<SetupOutcome> {
        info!("Setting up platform build tree");

        // 1. Load and validate the app config
        let mut config = self.config_source.load()?;
        config.validate()?;
        config.ensure_version_num()?;

        // 2. Run the platform setup hook against its own config section
        let section = config.ensure_platform_section(platform)?;
        if let Some(hook) = hooks_for(platform).and_then(|hooks| hooks.setup) {
            hook(section, self.environment.as_ref(), self.filesystem.as_ref())?;
        }

        // 3. Merge the source trees into the build directory
        let build_dir = self.project.build_dir(platform);
        let context = TemplateContext::for_build(config.clone(), &build_dir);
        let mut report = MergeReport::default();
        for spec in self.merge_plan(platform) {
            report.absorb(self.composer.compose(&spec, &context)?);
        }

        // 4. Discover the native modules the merges produced
        let native_modules = self.filesystem.subdirs(&self.project.native_dir(platform))?;
        if native_modules.is_empty() {
            debug!("No native modules present");
        } else {
            info!(count = native_modules.len(), "Discovered native modules");
        }

        // 5. Render the platform build templates with the full context
        let context = context.with_native_modules(native_modules.clone());
        report.absorb(self.composer.compose(
            &MergeSpec::new(
                self.framework.build_templates_dir(platform),
                build_dir.clone(),
            ),
            &context,
        )?);

        info!(
            rendered = report.rendered,
            copied = report.copied,
            up_to_date = report.up_to_date,
            "Platform setup complete"
        );
        Ok(SetupOutcome {
            platform,
            build_dir,
            report,
            native_modules,
            config,
        })
    }

    /// Set up the build tree, then run the platform's build hook.
    #[instrument(skip_all, fields(platform = %platform))]
    pub fn build(&self, platform: Platform) -> ChassisResult<SetupOutcome> {
        let outcome = self.setup(platform)?;
        if let Some(hook) = hooks_for(platform).and_then(|hooks| hooks.build) {
            info!("Running platform build");
            hook(self.runner.as_ref(), &outcome.build_dir)?;
        }
        Ok(outcome)
    }

    /// Set up the build tree, then run the platform's install hook.
    #[instrument(skip_all, fields(platform = %platform))]
    pub fn install(&self, platform: Platform) -> ChassisResult<SetupOutcome> {
        let outcome = self.setup(platform)?;
        if let Some(hook) = hooks_for(platform).and_then(|hooks| hooks.install) {
            info!("Running platform install");
            hook(self.runner.as_ref(), &outcome.build_dir)?;
        }
        Ok(outcome)
    }

    /// The fixed merge sequence for one platform.
    ///
    /// Order matters: the platform-base step carries filters that carve
    /// out the native tree the dedicated step already placed, and later
    /// steps may overwrite earlier output when their source is newer.
    fn merge_plan(&self, platform: Platform) -> Vec<MergeSpec> {
        vec![
            MergeSpec::new(
                self.project.components_dir(),
                self.project.package_components_dir(platform),
            ),
            MergeSpec::new(
                self.framework.core_dir(),
                self.project.package_core_dir(platform),
            ),
            MergeSpec::new(
                self.framework.platform_native_dir(platform),
                self.project.native_dir(platform),
            ),
            MergeSpec::new(
                self.framework.platform_dir(),
                self.project.package_platform_dir(platform),
            )
            .skip(self.framework.platform_native_dir(platform))
            .match_dir(self.framework.platform_subdir(platform))
            .match_dir(self.framework.platform_common_dir()),
        ]
    }
}
