//! Path arithmetic for the two trees chassis works with: the installed
//! framework distribution and the per-project build output.
//!
//! Nothing here touches the filesystem. Both layouts are plain value types
//! so the orchestrator and the adapters agree on where things live.

use std::path::{Path, PathBuf};

use crate::domain::Platform;

/// Name of the project configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = "app.yaml";

/// The installed chassis distribution.
///
/// ```text
/// <root>/
///   core/                 shared application runtime
///   platform/
///     common/             cross-platform platform support
///     <p>/                per-platform support code
///       native/           per-platform native modules
///   build/<p>/            per-platform build-tree templates
///   scaffold/             `chassis init` starter project
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkLayout {
    root: PathBuf,
}

impl FrameworkLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn core_dir(&self) -> PathBuf {
        self.root.join("core")
    }

    pub fn platform_dir(&self) -> PathBuf {
        self.root.join("platform")
    }

    pub fn platform_subdir(&self, platform: Platform) -> PathBuf {
        self.platform_dir().join(platform.as_str())
    }

    pub fn platform_common_dir(&self) -> PathBuf {
        self.platform_dir().join("common")
    }

    pub fn platform_native_dir(&self, platform: Platform) -> PathBuf {
        self.platform_subdir(platform).join("native")
    }

    pub fn build_templates_dir(&self, platform: Platform) -> PathBuf {
        self.root.join("build").join(platform.as_str())
    }

    pub fn scaffold_dir(&self) -> PathBuf {
        self.root.join("scaffold")
    }
}

/// One project directory and its per-platform build output.
///
/// Build output lands under `<root>/build/<platform>/`: merged sources in
/// `package/{components,core,platform}`, native modules in a sibling
/// `native/` that bypasses the platform-base filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join("components")
    }

    pub fn build_dir(&self, platform: Platform) -> PathBuf {
        self.root.join("build").join(platform.as_str())
    }

    pub fn package_dir(&self, platform: Platform) -> PathBuf {
        self.build_dir(platform).join("package")
    }

    pub fn package_components_dir(&self, platform: Platform) -> PathBuf {
        self.package_dir(platform).join("components")
    }

    pub fn package_core_dir(&self, platform: Platform) -> PathBuf {
        self.package_dir(platform).join("core")
    }

    pub fn package_platform_dir(&self, platform: Platform) -> PathBuf {
        self.package_dir(platform).join("platform")
    }

    pub fn native_dir(&self, platform: Platform) -> PathBuf {
        self.build_dir(platform).join("native")
    }
}
