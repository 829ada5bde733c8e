//! The install sequence.
//!
//! ```text
//! Start ──(uid != 0)──> Unauthorized
//!   │
//!   └─(uid == 0)──> locate source tree ──> build ──> chmod +x ──> mv ──> Done
//!                     │          │          │
//!                     └──────────┴──────────┴──> Aborted
//! ```
//!
//! Each step runs only if the previous one succeeded. A failed step returns
//! immediately; whatever earlier steps did stays done.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::common::files;
use crate::config::InstallPlan;
use crate::identity::Identity;
use crate::process;
use crate::timing::Timer;

/// Printed on stdout when the installer is run without root.
pub const SUDO_REQUIRED: &str =
    "atto-install must be run as root. Re-run it with sudo; nothing was changed.";

/// Terminal states that are not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Caller was not root. Nothing ran.
    Unauthorized,
    /// Binary is installed at the contained path.
    Installed(PathBuf),
}

/// The side-effecting steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Build,
    Permission,
    Move,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Build => "build",
            Step::Permission => "chmod",
            Step::Move => "mv",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A step failed and the install was aborted.
///
/// Messages mirror what the equivalent shell tool would print. The build step
/// has already written its own diagnostics to the terminal, so its message is
/// only used when something asks for it explicitly.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("atto-install: {0}")]
    SourceTree(#[source] io::Error),

    #[error(transparent)]
    Launch(anyhow::Error),

    #[error("build exited with status {}", process::exit_code(.status))]
    Build { status: ExitStatus },

    #[error("chmod: cannot access '{}': {source}", .path.display())]
    Permission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("mv: cannot move '{}' to '{}': {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StepError {
    /// Step the install stopped at. `None` if it stopped before the first step.
    pub fn step(&self) -> Option<Step> {
        match self {
            StepError::SourceTree(_) => None,
            StepError::Launch(_) | StepError::Build { .. } => Some(Step::Build),
            StepError::Permission { .. } => Some(Step::Permission),
            StepError::Move { .. } => Some(Step::Move),
        }
    }

    /// Process exit code to terminate with, following shell conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            StepError::Launch(_) => 127,
            StepError::Build { status } => process::exit_code(status),
            StepError::SourceTree(_) | StepError::Permission { .. } | StepError::Move { .. } => 1,
        }
    }

    /// Whether the failing step already told the user what went wrong.
    pub fn already_reported(&self) -> bool {
        matches!(self, StepError::Build { .. })
    }
}

/// Run the install for `caller`.
///
/// The plan is only resolved once the caller is known to be root, so a refusal
/// never depends on the state of the working directory.
pub fn run<F>(caller: Identity, plan: F) -> Result<Outcome, StepError>
where
    F: FnOnce() -> io::Result<InstallPlan>,
{
    if !caller.is_privileged() {
        tracing::debug!(%caller, "not root, refusing to install");
        return Ok(Outcome::Unauthorized);
    }

    let plan = plan().map_err(StepError::SourceTree)?;

    build(&plan)?;
    mark_executable(&plan)?;
    relocate(&plan)?;

    tracing::info!(destination = %plan.destination.display(), "installed");
    Ok(Outcome::Installed(plan.destination))
}

/// Print what the user needs to see for `result` and return the exit status.
///
/// A refusal goes to `out`. Failures go to `err`, except a failed build, which
/// has already spoken for itself on the inherited stderr.
pub fn report<O, E>(result: &Result<Outcome, StepError>, out: &mut O, err: &mut E) -> u8
where
    O: Write,
    E: Write,
{
    match result {
        Ok(Outcome::Unauthorized) => {
            let _ = writeln!(out, "{}", SUDO_REQUIRED);
            0
        }
        Ok(Outcome::Installed(_)) => 0,
        Err(e) => {
            if !e.already_reported() {
                let _ = writeln!(err, "{:#}", e);
            }
            u8::try_from(e.exit_code()).unwrap_or(1)
        }
    }
}

fn build(plan: &InstallPlan) -> Result<(), StepError> {
    tracing::debug!(step = %Step::Build, command = %plan.build, "starting");
    let timer = Timer::start(Step::Build.name());

    let status = plan.build.run_interactive().map_err(StepError::Launch)?;
    timer.finish();

    if !status.success() {
        return Err(StepError::Build { status });
    }
    Ok(())
}

fn mark_executable(plan: &InstallPlan) -> Result<(), StepError> {
    tracing::debug!(step = %Step::Permission, path = %plan.artifact.display(), "starting");

    files::set_executable(&plan.artifact).map_err(|source| StepError::Permission {
        path: plan.artifact.clone(),
        source,
    })
}

fn relocate(plan: &InstallPlan) -> Result<(), StepError> {
    tracing::debug!(
        step = %Step::Move,
        from = %plan.artifact.display(),
        to = %plan.destination.display(),
        "starting"
    );

    files::move_file(&plan.artifact, &plan.destination).map_err(|source| StepError::Move {
        from: plan.artifact.clone(),
        to: plan.destination.clone(),
        source,
    })
}
