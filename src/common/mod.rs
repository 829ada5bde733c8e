//! Shared filesystem utilities.

pub mod files;
