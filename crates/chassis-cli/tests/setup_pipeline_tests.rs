//! End-to-end tests driving the chassis binary against a framework
//! distribution, an Android SDK layout, and a project, all faked on disk.
//!
//! These run the real pipeline: config loading, the platform setup hook,
//! the tree merges with their filters, native module discovery, and
//! template rendering. Only gradle itself is faked.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A complete framework distribution.
fn framework_fixture() -> TempDir {
    let fw = TempDir::new().unwrap();
    let root = fw.path();

    write(&root.join("core/runtime.js"), "core runtime");
    write(&root.join("platform/common/log.js"), "shared logging");
    write(&root.join("platform/android/hooks.js"), "android glue");
    write(
        &root.join("platform/android/native/audio/audio.c"),
        "audio module",
    );
    write(
        &root.join("platform/android/native/sensors/sensors.c"),
        "sensor module",
    );
    write(&root.join("platform/ios/bridge.swift"), "ios glue");

    write(
        &root.join("build/android/build.gradle.tpl"),
        "applicationId '{{ app.id }}'\n\
         versionCode {{ app.version_num }}\n\
         targetSdk {{ app.android.target }}\n\
         buildTools '{{ app.android.build_tools }}'\n\
         ndk {{ app.android.ndk }}\n",
    );
    write(
        &root.join("build/android/settings.gradle.tpl"),
        "{% for m in native_modules %}include ':{{ m }}'\n{% endfor %}",
    );

    write(
        &root.join("scaffold/app.yaml"),
        "name: my-app\nid: com.example.my-app\nlaunch: Main\nversion: 0.1.0\n",
    );
    fs::create_dir_all(root.join("scaffold/components")).unwrap();

    fw
}

/// An installed-SDK layout with two build-tools and two platform targets.
fn sdk_fixture() -> TempDir {
    let sdk = TempDir::new().unwrap();
    for dir in [
        "build-tools/29.0.3",
        "build-tools/30.0.0",
        "platforms/android-31",
        "platforms/android-33",
    ] {
        fs::create_dir_all(sdk.path().join(dir)).unwrap();
    }
    sdk
}

/// A project with one component and a `latest` Android target.
fn project_fixture() -> TempDir {
    let project = TempDir::new().unwrap();
    write(
        &project.path().join("app.yaml"),
        "name: demo\n\
         id: com.example.demo\n\
         launch: Main\n\
         version: 1.2.3\n\
         android:\n\
         \x20 target: latest\n",
    );
    write(
        &project.path().join("components/analytics/analytics.js"),
        "analytics component",
    );
    project
}

/// A chassis invocation isolated from the developer's real environment.
fn chassis(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chassis").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd)
        .env_remove("CHASSIS_HOME")
        .env_remove("CHASSIS_FRAMEWORK_ROOT")
        .env_remove("ANDROID_HOME")
        .env_remove("ANDROID_NDK_HOME")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

// ── setup ─────────────────────────────────────────────────────────────────────

#[test]
fn setup_android_assembles_the_full_build_tree() {
    let fw = framework_fixture();
    let sdk = sdk_fixture();
    let project = project_fixture();

    chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .env("ANDROID_HOME", sdk.path())
        .args(["setup", "android"])
        .assert()
        .success();

    let build = project.path().join("build/android");

    // Merged sources, each in its package subtree.
    assert!(build.join("package/core/runtime.js").exists());
    assert!(build.join("package/components/analytics/analytics.js").exists());
    assert!(build.join("package/platform/android/hooks.js").exists());
    assert!(build.join("package/platform/common/log.js").exists());

    // Native modules land beside the package, not inside it.
    assert!(build.join("native/audio/audio.c").exists());
    assert!(build.join("native/sensors/sensors.c").exists());
    assert!(!build.join("package/platform/android/native").exists());

    // The other platform's tree is filtered out entirely.
    assert!(!build.join("package/platform/ios").exists());

    // Templates render with the extension stripped; the raw template
    // never reaches the destination.
    assert!(!build.join("build.gradle.tpl").exists());
    let gradle = fs::read_to_string(build.join("build.gradle")).unwrap();
    assert!(gradle.contains("applicationId 'com.example.demo'"));
    assert!(gradle.contains("versionCode 1020300"));
    assert!(gradle.contains("targetSdk 33"));
    assert!(gradle.contains("buildTools '30.0.0'"));
    assert!(gradle.contains("ndk false"));

    let settings = fs::read_to_string(build.join("settings.gradle")).unwrap();
    assert!(settings.contains("include ':audio'"));
    assert!(settings.contains("include ':sensors'"));
}

#[test]
fn setup_ios_needs_no_android_environment() {
    let fw = framework_fixture();
    let project = project_fixture();

    chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .args(["setup", "ios"])
        .assert()
        .success();

    let build = project.path().join("build/ios");
    assert!(build.join("package/core/runtime.js").exists());
    assert!(build.join("package/platform/ios/bridge.swift").exists());
    assert!(build.join("package/platform/common/log.js").exists());
    assert!(!build.join("package/platform/android").exists());
}

#[test]
fn setup_all_covers_every_platform() {
    let fw = framework_fixture();
    let sdk = sdk_fixture();
    let project = project_fixture();

    chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .env("ANDROID_HOME", sdk.path())
        .args(["setup", "all"])
        .assert()
        .success();

    assert!(
        project
            .path()
            .join("build/android/package/core/runtime.js")
            .exists()
    );
    assert!(
        project
            .path()
            .join("build/ios/package/core/runtime.js")
            .exists()
    );
}

#[test]
fn setup_android_requires_the_sdk() {
    let fw = framework_fixture();
    let project = project_fixture();

    chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .args(["setup", "android"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: ANDROID_HOME not defined"));
}

// ── incremental reruns ────────────────────────────────────────────────────────

#[test]
fn setup_reruns_skip_current_assets_but_rerender_templates() {
    let fw = framework_fixture();
    let sdk = sdk_fixture();
    let project = project_fixture();

    let run = || -> serde_json::Value {
        let output = chassis(project.path())
            .env("CHASSIS_HOME", fw.path())
            .env("ANDROID_HOME", sdk.path())
            .args(["--output-format", "json", "setup", "android"])
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice(&output.stdout).unwrap()
    };

    let first = run();
    assert_eq!(first[0]["report"]["copied"], 6);
    assert_eq!(first[0]["report"]["rendered"], 2);
    assert_eq!(first[0]["report"]["up_to_date"], 0);

    let second = run();
    assert_eq!(second[0]["report"]["copied"], 0);
    assert_eq!(second[0]["report"]["rendered"], 2);
    assert_eq!(second[0]["report"]["up_to_date"], 6);
}

// ── machine-readable output ───────────────────────────────────────────────────

#[test]
fn json_setup_emits_the_resolved_outcome() {
    let fw = framework_fixture();
    let sdk = sdk_fixture();
    let project = project_fixture();

    let output = chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .env("ANDROID_HOME", sdk.path())
        .args(["--output-format", "json", "setup", "android"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcomes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcome = &outcomes[0];
    assert_eq!(outcome["platform"], "android");
    assert_eq!(outcome["native_modules"], serde_json::json!(["audio", "sensors"]));
    assert_eq!(outcome["config"]["version_num"], 1_020_300);
    assert_eq!(outcome["config"]["android"]["target"], 33);
    assert_eq!(outcome["config"]["android"]["build_tools"], "30.0.0");
    assert_eq!(outcome["config"]["android"]["ndk"], false);
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_scaffolds_a_starter_project() {
    let fw = framework_fixture();
    let work = TempDir::new().unwrap();

    chassis(work.path())
        .env("CHASSIS_HOME", fw.path())
        .args(["init", "starter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project scaffolded"));

    let starter = work.path().join("starter");
    assert!(starter.join("app.yaml").exists());
    // Empty directories from the scaffold survive the merge.
    assert!(starter.join("components").is_dir());
}

// ── build and install ─────────────────────────────────────────────────────────

#[test]
fn build_without_gradle_reports_the_missing_tool() {
    let fw = framework_fixture();
    let sdk = sdk_fixture();
    let project = project_fixture();
    let empty_path = TempDir::new().unwrap();

    chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .env("ANDROID_HOME", sdk.path())
        .env("PATH", empty_path.path())
        .args(["build", "android"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Gradle not installed"));

    // The tree was still assembled before the tool check failed.
    assert!(project.path().join("build/android/build.gradle").exists());
}

#[cfg(unix)]
#[test]
fn install_android_drives_gradle_install_debug() {
    use std::os::unix::fs::PermissionsExt;

    let fw = framework_fixture();
    let sdk = sdk_fixture();
    let project = project_fixture();

    // A fake gradle that records its working directory and arguments.
    let bin = TempDir::new().unwrap();
    let calls = bin.path().join("calls.txt");
    let script = bin.path().join("gradle");
    write(
        &script,
        &format!(
            "#!/bin/sh\nprintf '%s %s\\n' \"$PWD\" \"$*\" > \"{}\"\n",
            calls.display()
        ),
    );
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    chassis(project.path())
        .env("CHASSIS_HOME", fw.path())
        .env("ANDROID_HOME", sdk.path())
        .env("PATH", bin.path())
        .args(["install", "android"])
        .assert()
        .success();

    let recorded = fs::read_to_string(&calls).unwrap();
    assert!(recorded.contains("installDebug"));
    assert!(recorded.contains("build/android"));
}
