//! The value bag handed to the template renderer.

use std::path::Path;

use serde::Serialize;

use crate::domain::AppConfig;

/// Render context for one pipeline stage.
///
/// Grows additively as the pipeline advances: the merge steps see `app`
/// and `build_path`, the final platform-template pass additionally sees
/// `native_modules`. Entries never mutate once set; absent entries are
/// omitted entirely so a template referencing one fails the render
/// instead of silently interpolating nothing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<AppConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_modules: Option<Vec<String>>,
}

impl TemplateContext {
    /// The empty context used by `chassis init`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context for a platform build: the validated config plus the
    /// absolute build directory.
    pub fn for_build(app: AppConfig, build_path: &Path) -> Self {
        Self {
            app: Some(app),
            build_path: Some(build_path.to_string_lossy().into_owned()),
            native_modules: None,
        }
    }

    /// Extend with the discovered native module names (already sorted).
    pub fn with_native_modules(mut self, modules: Vec<String>) -> Self {
        self.native_modules = Some(modules);
        self
    }
}
