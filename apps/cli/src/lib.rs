//! # vend: Vending Machine Command Line
//!
//! Everything between the shell and `vend-core`: argument parsing,
//! configuration, the snapshot store and console output.
//!
//! ## Module Organization
//! ```text
//! vend_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap command definitions
//! ├── commands.rs     ◄─── One handler per subcommand
//! ├── config.rs       ◄─── TOML + environment configuration
//! ├── printer.rs      ◄─── ConsolePrinter (the Reporter for terminals)
//! └── error.rs        ◄─── CliError and exit codes
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod printer;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vend_core::{Report, Reporter};
use vend_store::JsonFileStore;

use cli::Cli;
use commands::Context;
use config::AppConfig;
use error::CliResult;
use printer::ConsolePrinter;

/// Runs one `vend` invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Parse arguments ──────────────────────────────────────────────────► │
/// │     • clap exits with status 2 on usage errors                          │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • stderr, default WARN, RUST_LOG overrides                          │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • file → environment → command line                                 │
/// │                                                                         │
/// │  4. Execute Command ──────────────────────────────────────────────────► │
/// │     • load snapshot, run one operation, save if it changed anything     │
/// │                                                                         │
/// │  5. Exit ─────────────────────────────────────────────────────────────► │
/// │     • 0 on success, 1 when refused, 2 on bad configuration              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    init_tracing();

    let mut printer = ConsolePrinter::stdio();

    match run_with(&cli, &mut printer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.code();
            debug!(code = code.as_str(), error = %err, "Command failed");

            if !err.is_reported() {
                printer.report(Report::error(err.to_string()));
            }
            ExitCode::from(code.exit_code())
        }
    }
}

/// Resolves configuration and executes the parsed command.
pub fn run_with(cli: &Cli, reporter: &mut dyn Reporter) -> CliResult<()> {
    let mut config = AppConfig::load(cli.config.clone())?;

    if let Some(path) = &cli.state_file {
        config.storage.state_file = Some(path.clone());
    }
    if let Some(color) = cli.color {
        config.output.color = color;
    }
    config.output.color.apply();

    let store = JsonFileStore::new(config.store_config());
    info!(
        command = cli.command.name(),
        state_file = %store.path().display(),
        "Running command"
    );

    let mut ctx = Context::new(&store, reporter, config.machine);
    commands::execute(&cli.command, &mut ctx)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vend_store=debug` - Snapshot I/O only
/// - Default: WARN, so logs stay out of the way of command output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
