//! Template rendering over minijinja.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use chassis_core::application::ApplicationError;
use chassis_core::application::ports::TemplateRenderer;
use chassis_core::domain::TemplateContext;
use chassis_core::error::ChassisResult;

// One engine for the process. Template sources are rendered ad hoc, so
// the environment carries settings only, never named templates.
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(|| {
        let mut env = Environment::new();
        // An undefined name in a template is a broken build tree, not
        // something to silently render as empty.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

/// Renders `.tpl` sources against the build context.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, source: &str, context: &TemplateContext) -> ChassisResult<String> {
        engine()
            .render_str(source, context)
            .map_err(|err| ApplicationError::RenderFailed {
                reason: err.to_string(),
            }
            .into())
    }
}
