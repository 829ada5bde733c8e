//! Shared test utilities for atto-install tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use atto_install::config::{InstallPlan, ARTIFACT_RELATIVE_PATH, BINARY_NAME};
use atto_install::process::Cmd;

/// Contents the stand-in build writes as its "binary".
pub const FAKE_BINARY: &str = "#!/bin/sh\necho atto\n";

/// Scratch source tree and bin directory standing in for `/usr/local/bin`.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Simulated source tree root (build runs here)
    pub source_dir: PathBuf,
    /// Simulated system binary directory
    pub bin_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source_dir = temp_dir.path().join("src");
        let bin_dir = temp_dir.path().join("bin");

        fs::create_dir_all(&source_dir).expect("Failed to create source dir");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");

        Self {
            _temp_dir: temp_dir,
            source_dir,
            bin_dir,
        }
    }

    pub fn artifact(&self) -> PathBuf {
        self.source_dir.join(ARTIFACT_RELATIVE_PATH)
    }

    pub fn destination(&self) -> PathBuf {
        self.bin_dir.join(BINARY_NAME)
    }

    /// File the stand-in build touches to prove it ran.
    pub fn build_marker(&self) -> PathBuf {
        self.source_dir.join("build-ran")
    }

    /// Plan whose build step runs `script` through `sh -c` in the source tree.
    pub fn plan_with_build(&self, script: &str) -> InstallPlan {
        InstallPlan {
            build: Cmd::new("sh").args(["-c", script]).dir(&self.source_dir),
            artifact: self.artifact(),
            destination: self.destination(),
        }
    }

    /// Plan whose build step behaves like a successful release build.
    pub fn plan(&self) -> InstallPlan {
        self.plan_with_build(&format!(
            "touch build-ran && mkdir -p target/release && printf '{}' > {}",
            FAKE_BINARY.replace('\n', "\\n"),
            ARTIFACT_RELATIVE_PATH
        ))
    }
}

pub fn mode_of(path: &Path) -> u32 {
    fs::metadata(path)
        .expect("Failed to get metadata")
        .permissions()
        .mode()
        & 0o777
}

pub fn assert_executable(path: &Path) {
    assert!(path.is_file(), "Expected file at {}", path.display());
    let mode = mode_of(path);
    assert_eq!(
        mode & 0o111,
        0o111,
        "Expected {} to be executable, mode is {:o}",
        path.display(),
        mode
    );
}

pub fn assert_not_exists(path: &Path) {
    assert!(!path.exists(), "Expected nothing at {}", path.display());
}
