//! Android lifecycle hooks.
//!
//! Setup inspects the installed SDK and pins the results into the android
//! section of the app config: NDK availability, the newest build-tools
//! release, and the resolved platform target when the config asks for
//! `latest`. Build and install drive gradle inside the generated build
//! tree.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::application::ApplicationError;
use crate::application::ports::{CommandRunner, Environment, Filesystem};
use crate::domain::{DomainError, compare_versions};
use crate::error::{ChassisError, ChassisResult};

const SDK_VAR: &str = "ANDROID_HOME";
const NDK_VAR: &str = "ANDROID_NDK_HOME";

/// Canonical ABI names and the alternate spellings they absorb.
static ABI_ALIASES: &[(&str, &[&str])] = &[
    ("armeabi", &["arm"]),
    ("armeabi-v7a", &["arm-v7", "arm-v7a", "armv7", "armv7a"]),
];

pub(crate) fn setup(
    section: &mut Map<String, Value>,
    env: &dyn Environment,
    fs: &dyn Filesystem,
) -> ChassisResult<()> {
    let sdk = sdk_root(env, fs)?;

    // A missing NDK degrades native support instead of failing the build.
    let ndk = match env.var(NDK_VAR) {
        None => {
            warn!("NDK not installed ({NDK_VAR} not defined), skipping native modules");
            false
        }
        Some(path) if !fs.exists(Path::new(&path)) => {
            warn!(%path, "NDK not installed ({NDK_VAR} does not exist), skipping native modules");
            false
        }
        Some(_) => true,
    };
    section.insert("ndk".to_string(), Value::Bool(ndk));

    let build_tools = newest_build_tools(fs, &sdk)?;
    info!(%build_tools, "selected build-tools");
    section.insert("build_tools".to_string(), Value::String(build_tools));

    if section.get("target").and_then(Value::as_str) == Some("latest") {
        let target = newest_platform_target(fs, &sdk)?;
        info!(target, "resolved latest platform target");
        section.insert("target".to_string(), Value::from(target));
    }

    normalize_abis(section);
    Ok(())
}

pub(crate) fn build(runner: &dyn CommandRunner, build_dir: &Path) -> ChassisResult<()> {
    gradle(runner, build_dir, "build")
}

pub(crate) fn install(runner: &dyn CommandRunner, build_dir: &Path) -> ChassisResult<()> {
    gradle(runner, build_dir, "installDebug")
}

fn sdk_root(env: &dyn Environment, fs: &dyn Filesystem) -> ChassisResult<PathBuf> {
    let sdk = env
        .var(SDK_VAR)
        .ok_or(DomainError::EnvVarNotDefined { var: SDK_VAR })?;
    let sdk = PathBuf::from(sdk);
    if !fs.exists(&sdk) {
        return Err(DomainError::EnvPathMissing {
            var: SDK_VAR,
            path: sdk,
        }
        .into());
    }
    Ok(sdk)
}

fn newest_build_tools(fs: &dyn Filesystem, sdk: &Path) -> ChassisResult<String> {
    let versions = fs.subdirs(&sdk.join("build-tools"))?;
    versions
        .into_iter()
        .max_by(|a, b| compare_versions(a, b))
        .ok_or_else(|| DomainError::NoBuildTools.into())
}

fn newest_platform_target(fs: &dyn Filesystem, sdk: &Path) -> ChassisResult<u64> {
    let targets = fs.subdirs(&sdk.join("platforms"))?;
    targets
        .iter()
        .filter_map(|name| api_level(name))
        .max()
        .ok_or_else(|| DomainError::NoPlatformTargets.into())
}

/// `android-33` and `android-33-ext5` both read as API level 33.
fn api_level(name: &str) -> Option<u64> {
    name.strip_prefix("android-")?.split('-').next()?.parse().ok()
}

/// Collapse ABI alias spellings into their canonical names.
///
/// Pure set transformation: duplicates merge, order is rebuilt sorted,
/// names that alias nothing pass through untouched.
fn normalize_abis(section: &mut Map<String, Value>) {
    let Some(Value::Array(entries)) = section.get("arch") else {
        return;
    };
    let mut abis: BTreeSet<String> = entries
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    for (canonical, aliases) in ABI_ALIASES {
        let mut hit = false;
        for alias in *aliases {
            hit |= abis.remove(*alias);
        }
        if hit {
            abis.insert((*canonical).to_string());
        }
    }
    section.insert(
        "arch".to_string(),
        Value::from(abis.into_iter().collect::<Vec<_>>()),
    );
}

fn gradle(runner: &dyn CommandRunner, build_dir: &Path, task: &str) -> ChassisResult<()> {
    debug!(task, cwd = %build_dir.display(), "invoking gradle");
    match runner.run("gradle", &[task], build_dir) {
        Err(ChassisError::Application(ApplicationError::CommandNotFound { .. })) => {
            Err(DomainError::ToolNotInstalled { tool: "Gradle" }.into())
        }
        result => result,
    }
}
