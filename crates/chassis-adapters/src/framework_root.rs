//! Locating the installed framework distribution.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use chassis_core::domain::{DomainError, FrameworkLayout};
use chassis_core::error::ChassisResult;

/// Environment variable naming the framework distribution root.
pub const FRAMEWORK_HOME_VAR: &str = "CHASSIS_HOME";

/// Resolve the framework root, trying in order:
///
/// 1. an explicit `--framework-root` override
/// 2. `$CHASSIS_HOME`
/// 3. the `framework_root` key of the CLI configuration file
/// 4. a `chassis` directory next to the executable (packaged installs)
/// 5. `../chassis` relative to the executable (development checkouts)
///
/// A candidate only counts when it actually holds the `core/` and
/// `platform/` trees, so a stale variable pointing at an empty directory
/// falls through to the next candidate instead of producing confusing
/// merge no-ops later.
pub fn resolve(
    override_root: Option<&Path>,
    configured_root: Option<&Path>,
) -> ChassisResult<FrameworkLayout> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(root) = override_root {
        candidates.push(root.to_path_buf());
    }
    if let Some(home) = env::var_os(FRAMEWORK_HOME_VAR) {
        if !home.is_empty() {
            candidates.push(PathBuf::from(home));
        }
    }
    if let Some(root) = configured_root {
        candidates.push(root.to_path_buf());
    }
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("chassis"));
            candidates.push(dir.join("..").join("chassis"));
        }
    }

    for candidate in candidates {
        if looks_like_framework_root(&candidate) {
            info!(root = %candidate.display(), "resolved framework root");
            return Ok(FrameworkLayout::new(candidate));
        }
        debug!(candidate = %candidate.display(), "not a framework root");
    }

    warn!("no framework root found; set {FRAMEWORK_HOME_VAR} or pass --framework-root");
    Err(DomainError::FrameworkRootNotFound.into())
}

fn looks_like_framework_root(path: &Path) -> bool {
    path.join("core").is_dir() && path.join("platform").is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_framework(root: &Path) {
        fs::create_dir_all(root.join("core")).unwrap();
        fs::create_dir_all(root.join("platform/android")).unwrap();
    }

    #[test]
    fn an_override_with_the_framework_trees_resolves() {
        let tmp = TempDir::new().unwrap();
        make_framework(tmp.path());

        let layout = resolve(Some(tmp.path()), None).unwrap();

        assert_eq!(layout.root(), tmp.path());
    }

    #[test]
    fn the_override_beats_the_configured_root() {
        let tmp = TempDir::new().unwrap();
        let (first, second) = (tmp.path().join("a"), tmp.path().join("b"));
        make_framework(&first);
        make_framework(&second);

        let layout = resolve(Some(&first), Some(&second)).unwrap();

        assert_eq!(layout.root(), first);
    }

    #[test]
    fn a_directory_without_both_trees_is_not_a_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("core")).unwrap();

        assert!(!looks_like_framework_root(tmp.path()));

        fs::create_dir_all(tmp.path().join("platform")).unwrap();
        assert!(looks_like_framework_root(tmp.path()));
    }

    #[test]
    fn an_empty_override_never_masks_the_real_error() {
        let tmp = TempDir::new().unwrap();

        // The override exists but holds nothing, so resolution moves on
        // and either finds a real install or reports the domain error.
        match resolve(Some(&tmp.path().join("hollow")), None) {
            Ok(layout) => assert_ne!(layout.root(), tmp.path().join("hollow")),
            Err(err) => {
                assert_eq!(err.to_string(), "Cannot find chassis framework root");
                assert!(err.is_recoverable());
            }
        }
    }
}
