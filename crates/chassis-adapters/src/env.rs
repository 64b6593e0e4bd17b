//! Process environment adapters.

use std::collections::HashMap;

use chassis_core::application::ports::Environment;

/// Reads variables from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed-map environment for tests and hermetic runs.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_environment_reads_real_variables() {
        let env = SystemEnvironment::new();

        // PATH is present in any environment these tests run under.
        assert!(env.var("PATH").is_some());
        assert_eq!(env.var("CHASSIS_TEST_UNSET_VARIABLE_7QX"), None);
    }

    #[test]
    fn map_environment_serves_only_what_was_inserted() {
        let env = MapEnvironment::new().with("ANDROID_HOME", "/opt/sdk");

        assert_eq!(env.var("ANDROID_HOME").as_deref(), Some("/opt/sdk"));
        assert_eq!(env.var("ANDROID_NDK_HOME"), None);
    }
}
