//! Command-line interface definitions.
//!
//! Defines the `vend` command surface using `clap`. Every invocation runs
//! exactly one subcommand against the stored machine.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vend_core::Money;

use crate::config::ColorChoice;

/// A vending machine that lives in your terminal
#[derive(Parser, Debug)]
#[command(name = "vend")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = "VEND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file to use (wins over config and VEND_STATE_FILE)
    #[arg(long, global = true)]
    pub state_file: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(long, global = true, hide_possible_values = true)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create the vending machine (an existing one is kept)
    Start,

    /// Remove the vending machine
    Destroy,

    /// Replace the vending machine with a freshly stocked one
    Rebuild,

    /// List the items in the machine. Filters are additive
    ViewItems(ViewItemsArgs),

    /// Insert money
    AddMoney {
        /// Amount to insert, e.g. 10 or 1.25
        #[arg(allow_negative_numbers = true)]
        amount: Money,
    },

    /// Buy one unit of the item at a position
    Purchase {
        /// Slot label, e.g. A1
        position: String,
    },

    /// Show the current balance
    ViewBalance,

    /// List everything bought so far
    ViewPurchases,

    /// Return all inserted money
    DispenseChange,
}

impl Command {
    /// Name as typed on the command line, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Destroy => "destroy",
            Command::Rebuild => "rebuild",
            Command::ViewItems(_) => "view-items",
            Command::AddMoney { .. } => "add-money",
            Command::Purchase { .. } => "purchase",
            Command::ViewBalance => "view-balance",
            Command::ViewPurchases => "view-purchases",
            Command::DispenseChange => "dispense-change",
        }
    }
}

/// Arguments for `view-items`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewItemsArgs {
    /// Only items in this column (A, B, ...)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Only items in this row (1, 2, ...)
    #[arg(short, long)]
    pub row: Option<u32>,

    /// One specific slot, e.g. B2
    #[arg(short, long, conflicts_with_all = ["column", "row"])]
    pub position: Option<String>,
}
