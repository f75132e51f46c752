//! # vend Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    vend_cli::run()
}
