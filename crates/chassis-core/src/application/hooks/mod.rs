//! Platform lifecycle hook registry.
//!
//! Each platform is described exactly once by its [`PlatformDef`]; an
//! absent hook is an explicit `None`, which dispatch treats as "no extra
//! behavior". The platform surface stays visible to the compiler, never
//! assembled from strings at call time.
//!
//! Adding a platform takes two edits: a `Platform` variant in
//! `domain::platform` and one [`PlatformDef`] entry in
//! [`PLATFORM_REGISTRY`]. The registry test fails until both exist.

use std::path::Path;

use serde_json::{Map, Value};

use crate::application::ports::{CommandRunner, Environment, Filesystem};
use crate::domain::Platform;
use crate::error::ChassisResult;

pub mod android;

/// Enriches the platform's config section before the merge pipeline runs.
///
/// The mutable borrow covers that one section only; a hook cannot reach
/// the rest of the config.
pub type SetupHook =
    fn(&mut Map<String, Value>, &dyn Environment, &dyn Filesystem) -> ChassisResult<()>;

/// Drives the platform's external build tool inside the build directory.
pub type ToolHook = fn(&dyn CommandRunner, &Path) -> ChassisResult<()>;

/// The optional lifecycle callbacks one platform registers.
#[derive(Debug, Clone, Copy)]
pub struct PlatformHooks {
    pub setup: Option<SetupHook>,
    pub build: Option<ToolHook>,
    pub install: Option<ToolHook>,
}

/// Hook set for platforms that ride the pipeline with no extra behavior.
pub const NO_HOOKS: PlatformHooks = PlatformHooks {
    setup: None,
    build: None,
    install: None,
};

/// One platform's registry entry.
#[derive(Debug, Clone, Copy)]
pub struct PlatformDef {
    pub platform: Platform,
    pub hooks: PlatformHooks,
}

/// Single source of truth for platform hooks.
///
/// To add a platform: add one entry here. No `match` arms elsewhere.
pub static PLATFORM_REGISTRY: &[PlatformDef] = &[
    PlatformDef {
        platform: Platform::Android,
        hooks: PlatformHooks {
            setup: Some(android::setup),
            build: Some(android::build),
            install: Some(android::install),
        },
    },
    PlatformDef {
        platform: Platform::Ios,
        hooks: NO_HOOKS,
    },
];

/// Find the hook set registered for a platform.
///
/// Returns `None` only if the platform is not registered, which is a
/// programming error. The `verify_registry` test catches it, and
/// dispatch treats it the same as an empty hook set.
pub fn hooks_for(platform: Platform) -> Option<&'static PlatformHooks> {
    PLATFORM_REGISTRY
        .iter()
        .find(|def| def.platform == platform)
        .map(|def| &def.hooks)
}

// ── registry checks ──────────────────────────────────────────────────────────

/// Panics when a platform is missing from [`PLATFORM_REGISTRY`] or listed
/// more than once. Meant for tests; dispatch never calls it.
#[doc(hidden)]
pub fn verify_registry() {
    for platform in Platform::ALL {
        let entries = PLATFORM_REGISTRY
            .iter()
            .filter(|def| def.platform == platform)
            .count();
        assert_eq!(
            entries, 1,
            "Platform {:?} must have exactly one registry entry, found {}",
            platform, entries
        );
    }
    assert_eq!(
        PLATFORM_REGISTRY.len(),
        Platform::ALL.len(),
        "Registry has entries for unknown platforms"
    );
}
