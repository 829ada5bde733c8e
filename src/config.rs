//! Installation plan for atto.
//!
//! Everything here is fixed at compile time. There is no config file and no
//! environment variable that moves the artifact or the destination.

use std::io;
use std::path::{Path, PathBuf};

use crate::process::Cmd;

/// Name of the installed binary.
pub const BINARY_NAME: &str = "atto";

/// Release build toolchain and its arguments.
pub const BUILD_PROGRAM: &str = "cargo";
pub const BUILD_ARGS: &[&str] = &["build", "--release"];

/// Where the release build leaves the binary, relative to the source tree root.
pub const ARTIFACT_RELATIVE_PATH: &str = "target/release/atto";

/// System binary directory on the default `PATH`.
pub const SYSTEM_BIN_DIR: &str = "/usr/local/bin";

/// The three inputs of an install: what to run, what it produces, where it goes.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    /// Release build command, run in the source tree.
    pub build: Cmd,
    /// Build output path.
    pub artifact: PathBuf,
    /// Final location of the binary.
    pub destination: PathBuf,
}

impl InstallPlan {
    /// Plan for installing atto from the source tree in the current directory.
    pub fn system() -> io::Result<Self> {
        let source_dir = std::env::current_dir()?;
        Ok(Self::for_source_tree(&source_dir))
    }

    /// Plan for a given source tree, targeting [`SYSTEM_BIN_DIR`].
    pub fn for_source_tree(source_dir: &Path) -> Self {
        Self {
            build: Cmd::new(BUILD_PROGRAM).args(BUILD_ARGS).dir(source_dir),
            artifact: source_dir.join(ARTIFACT_RELATIVE_PATH),
            destination: Path::new(SYSTEM_BIN_DIR).join(BINARY_NAME),
        }
    }
}
