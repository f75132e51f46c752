//! # Command Handlers
//!
//! One handler per subcommand. Each loads the machine, runs one operation,
//! and saves when the operation changed something.
//!
//! ## Machine Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Machine Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐   start    ┌──────────┐  add-money / purchase /          │
//! │  │    No    │──────────►│  Stored  │  dispense-change                 │
//! │  │ machine  │            │ machine  │◄──────────┐ load → op → save    │
//! │  └──────────┘◄──────────└──────────┘───────────┘                     │
//! │       ▲         destroy       │  │                                    │
//! │       │                       │  └── view-items / view-balance /      │
//! │       │                       │      view-purchases  (load → op)      │
//! │       │                       ▼                                         │
//! │       └──────────────────  rebuild  (fresh machine saved over it)      │
//! │                                                                         │
//! │  Anything but start/destroy/rebuild with no machine:                   │
//! │     "Please initialize the vending machine first."                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};
use vend_core::position::column_index;
use vend_core::{
    CoreError, Money, Position, Report, Reporter, SlotFilter, ValidationError, VendingMachine,
    CATALOG,
};
use vend_store::SnapshotStore;

use crate::cli::{Command, ViewItemsArgs};
use crate::config::MachineSettings;
use crate::error::{CliError, CliResult};

/// What every handler works with.
pub struct Context<'a> {
    pub store: &'a dyn SnapshotStore,
    pub reporter: &'a mut dyn Reporter,
    /// Size of freshly built machines. Only checked by `start` and `rebuild`.
    pub machine: MachineSettings,
}

impl<'a> Context<'a> {
    pub fn new(
        store: &'a dyn SnapshotStore,
        reporter: &'a mut dyn Reporter,
        machine: MachineSettings,
    ) -> Self {
        Context {
            store,
            reporter,
            machine,
        }
    }

    fn load(&self) -> CliResult<VendingMachine> {
        Ok(self.store.load()?)
    }

    fn save(&self, machine: &VendingMachine) -> CliResult<()> {
        Ok(self.store.save(machine)?)
    }

    fn fresh_machine(&self) -> CliResult<VendingMachine> {
        let layout = self.machine.layout()?;
        Ok(VendingMachine::with_layout(CATALOG, layout))
    }

    /// Reports an input error the machine never got to see.
    fn reject(&mut self, err: ValidationError) -> CliError {
        let err = CoreError::from(err);
        self.reporter.report(Report::from(&err));
        CliError::Domain(err)
    }
}

/// Runs one subcommand.
pub fn execute(command: &Command, ctx: &mut Context<'_>) -> CliResult<()> {
    debug!(command = command.name(), "Executing command");

    match command {
        Command::Start => start(ctx),
        Command::Destroy => destroy(ctx),
        Command::Rebuild => rebuild(ctx),
        Command::ViewItems(args) => view_items(ctx, args),
        Command::AddMoney { amount } => add_money(ctx, *amount),
        Command::Purchase { position } => purchase(ctx, position),
        Command::ViewBalance => view_balance(ctx),
        Command::ViewPurchases => view_purchases(ctx),
        Command::DispenseChange => dispense_change(ctx),
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Creates the machine unless one already exists.
pub fn start(ctx: &mut Context<'_>) -> CliResult<()> {
    if ctx.store.exists() {
        ctx.reporter.report(Report::info(
            "An existing vending machine exists. Proceeding with that.",
        ));
        return Ok(());
    }

    ctx.save(&ctx.fresh_machine()?)?;
    info!(
        rows = ctx.machine.rows,
        columns = ctx.machine.columns,
        stock = ctx.machine.stock,
        "Vending machine created"
    );
    ctx.reporter.report(Report::success("Vending machine created."));
    Ok(())
}

/// Removes the machine if there is one.
pub fn destroy(ctx: &mut Context<'_>) -> CliResult<()> {
    if ctx.store.delete()? {
        ctx.reporter.report(Report::success("Vending machine destroyed."));
    } else {
        ctx.reporter
            .report(Report::info("No vending machine found. Doing nothing."));
    }
    Ok(())
}

/// Replaces any existing machine with a fresh one.
///
/// The old snapshot is overwritten by the save, so a failed save leaves it
/// in place.
pub fn rebuild(ctx: &mut Context<'_>) -> CliResult<()> {
    let fresh = ctx.fresh_machine()?;
    let existed = ctx.store.exists();
    ctx.save(&fresh)?;

    info!(replaced = existed, "Vending machine rebuilt");
    ctx.reporter.report(Report::success("Vending machine rebuilt."));
    Ok(())
}

// =============================================================================
// Mutating Commands
// =============================================================================

pub fn add_money(ctx: &mut Context<'_>, amount: Money) -> CliResult<()> {
    let mut machine = ctx.load()?;
    machine.deposit(amount, ctx.reporter)?;
    ctx.save(&machine)
}

pub fn purchase(ctx: &mut Context<'_>, position: &str) -> CliResult<()> {
    let mut machine = ctx.load()?;
    let receipt = machine.purchase_item(&position.to_uppercase(), ctx.reporter)?;
    debug!(position = %receipt.position, price = %receipt.price, "Purchase recorded");
    ctx.save(&machine)
}

pub fn dispense_change(ctx: &mut Context<'_>) -> CliResult<()> {
    let mut machine = ctx.load()?;
    let change = machine.dispense_change(ctx.reporter);
    debug!(change = %change, "Change dispensed");
    ctx.save(&machine)
}

// =============================================================================
// Read-Only Commands
// =============================================================================

/// Lists slots. `--position` takes precedence; otherwise `--column` and
/// `--row` combine.
pub fn view_items(ctx: &mut Context<'_>, args: &ViewItemsArgs) -> CliResult<()> {
    let machine = ctx.load()?;

    let filter = match slot_filter(args) {
        Ok(filter) => filter,
        Err(err) => return Err(ctx.reject(err)),
    };

    let listed = machine.view_items(filter, ctx.reporter)?;
    debug!(listed, "Items listed");
    Ok(())
}

pub fn view_balance(ctx: &mut Context<'_>) -> CliResult<()> {
    ctx.load()?.view_balance(ctx.reporter);
    Ok(())
}

pub fn view_purchases(ctx: &mut Context<'_>) -> CliResult<()> {
    ctx.load()?.view_purchases(ctx.reporter);
    Ok(())
}

/// Turns `view-items` flags into a filter. Letters are case-insensitive.
fn slot_filter(args: &ViewItemsArgs) -> Result<SlotFilter, ValidationError> {
    if let Some(position) = &args.position {
        let position: Position = position.to_uppercase().parse()?;
        return Ok(SlotFilter::at(position));
    }

    let column = match &args.column {
        Some(column) => Some(parse_column(column)?),
        None => None,
    };

    Ok(SlotFilter {
        column,
        row: args.row,
    })
}

fn parse_column(column: &str) -> Result<u32, ValidationError> {
    let trimmed = column.trim();
    let mut letters = trimmed.chars();

    match (letters.next(), letters.next()) {
        (Some(letter), None) => column_index(letter.to_ascii_uppercase()),
        _ => Err(ValidationError::InvalidColumn {
            column: trimmed.to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
