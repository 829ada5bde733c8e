//! atto-install library exports for testing.
//!
//! The binary in `main.rs` is a thin wrapper over [`install::run`].

pub mod common;
pub mod config;
pub mod identity;
pub mod install;
pub mod logging;
pub mod process;
pub mod timing;
