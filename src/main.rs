//! atto-install - builds atto and installs it system-wide.
//!
//! Must be run as root from the root of the atto source tree:
//! `cargo build --release`, `chmod +x target/release/atto`,
//! `mv target/release/atto /usr/local/bin/atto`.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use atto_install::config::InstallPlan;
use atto_install::identity::Identity;
use atto_install::install;
use atto_install::logging;

#[derive(Parser)]
#[command(name = "atto-install")]
#[command(version)]
#[command(about = "Build atto in release mode and install it to /usr/local/bin")]
#[command(after_help = "Run from the atto source tree:\n  sudo atto-install")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    logging::init();

    let result = install::run(Identity::effective(), InstallPlan::system);
    ExitCode::from(install::report(
        &result,
        &mut io::stdout(),
        &mut io::stderr(),
    ))
}
