//! # Vending Machine
//!
//! The aggregate that owns every slot, the inserted balance and the purchase
//! history, and the only place they change.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       VendingMachine                                    │
//! │                                                                         │
//! │   deposit(amount) ────────► balance += amount                          │
//! │                                                                         │
//! │   purchase_item("A1") ────► item.stock -= 1                            │
//! │                             balance  -= price     (all three or none)   │
//! │                             purchases.push(..)                          │
//! │                                                                         │
//! │   dispense_change() ──────► balance = 0                                │
//! │                                                                         │
//! │   view_items / view_balance / view_purchases ──► read only             │
//! │                                                                         │
//! │   to_snapshot() ◄────────► from_snapshot()                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reporting Contract
//! Mutating operations and `view_balance` emit exactly one [`Report`] per
//! call, success or error, and hand back the same outcome as a `Result`.
//! Listings emit one report per line, or a single error report.
//! User mistakes never panic and never leave partial state behind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::{build_slots, CatalogEntry, MachineLayout, CATALOG};
use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::{self, Money};
use crate::position::{column_letter, Position};
use crate::purchase::Purchase;
use crate::report::{Report, Reporter};
use crate::validation::{validate_balance, validate_price};

// =============================================================================
// Snapshot
// =============================================================================

/// The serialized form of a machine.
///
/// ## Shape
/// ```json
/// {
///   "balance": "8.25",
///   "items": { "A1": { "name": "Gatorade (Blue)", "price": "1.75", "remaining_stock": 2 } },
///   "purchases": [ { "position": "A1", "price": "1.75" } ]
/// }
/// ```
/// Money is always a decimal string; `items` is keyed by slot label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub balance: Money,
    pub items: BTreeMap<Position, Item>,
    pub purchases: Vec<Purchase>,
}

// =============================================================================
// Views
// =============================================================================

/// Which slots `view_items` should list. Both constraints must hold when
/// both are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotFilter {
    pub column: Option<u32>,
    pub row: Option<u32>,
}

impl SlotFilter {
    /// Every slot.
    pub fn all() -> Self {
        SlotFilter::default()
    }

    /// Exactly one slot.
    pub fn at(position: Position) -> Self {
        SlotFilter {
            column: Some(position.column()),
            row: Some(position.row()),
        }
    }

    pub fn matches(&self, position: &Position) -> bool {
        self.column.map_or(true, |column| position.column() == column)
            && self.row.map_or(true, |row| position.row() == row)
    }

    /// How the filter reads in messages: `B7`, `Column D`, `Row 9`.
    fn describe(&self) -> String {
        let column = self
            .column
            .map(|column| column_letter(column).map_or_else(|_| column.to_string(), String::from));

        match (column, self.row) {
            (Some(column), Some(row)) => format!("{}{}", column, row),
            (Some(column), None) => format!("Column {}", column),
            (None, Some(row)) => format!("Row {}", row),
            (None, None) => "The machine".to_string(),
        }
    }
}

/// One line of `view_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView<'a> {
    pub position: Position,
    pub item: &'a Item,
}

impl fmt::Display for SlotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} costs {}, and there are {} units in stock.",
            self.position,
            self.item.name(),
            self.item.price(),
            self.item.remaining_stock()
        )
    }
}

/// What a successful purchase hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub position: Position,
    pub name: String,
    pub price: Money,
    /// Balance left after paying.
    pub balance: Money,
}

/// Header numbers for `view_purchases`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseTotals {
    pub spent: Money,
    pub count: usize,
}

impl fmt::Display for PurchaseTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You've spent {} on {} items.", self.spent, self.count)?;
        if self.count > 0 {
            write!(f, " You bought...")?;
        }
        Ok(())
    }
}

// =============================================================================
// Vending Machine
// =============================================================================

/// A single vending machine: slots, balance and purchase history.
///
/// Equality is by value, which is what snapshot round trips are checked
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendingMachine {
    items: BTreeMap<Position, Item>,
    balance: Money,
    purchases: Vec<Purchase>,
}

impl Default for VendingMachine {
    fn default() -> Self {
        VendingMachine::new()
    }
}

impl VendingMachine {
    /// A fresh machine: the static catalog on the default 5 × 3 grid, three
    /// units per slot, no money in, nothing bought.
    pub fn new() -> Self {
        VendingMachine::with_layout(CATALOG, MachineLayout::default())
    }

    /// A fresh machine stocked from `catalog` on `layout`.
    pub fn with_layout(catalog: &[CatalogEntry], layout: MachineLayout) -> Self {
        VendingMachine {
            items: build_slots(catalog, layout),
            balance: Money::zero(),
            purchases: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn items(&self) -> &BTreeMap<Position, Item> {
        &self.items
    }

    pub fn item(&self, position: &Position) -> Option<&Item> {
        self.items.get(position)
    }

    /// Purchase history, oldest first.
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    // =========================================================================
    // Mutating Operations
    // =========================================================================

    /// Inserts money.
    ///
    /// ## Outcomes
    /// - `amount <= 0` → error report, balance unchanged
    /// - new balance beyond `MAX_AMOUNT_UNITS` → error report, balance unchanged
    /// - otherwise → balance grows, success report with the new balance
    pub fn deposit(&mut self, amount: Money, reporter: &mut dyn Reporter) -> CoreResult<Money> {
        let result = if amount.is_positive() {
            money::add(self.balance, amount, &[])
                .map(|balance| {
                    self.balance = balance;
                    balance
                })
                .map_err(CoreError::from)
        } else {
            Err(CoreError::NonPositiveDeposit { amount })
        };

        emit(reporter, result, |balance| {
            Report::success(format!(
                "Successfully deposited {}. Your balance is now {}.",
                amount, balance
            ))
        })
    }

    /// Buys one unit from the slot labelled `position`.
    ///
    /// ## User Workflow
    /// ```text
    /// vend purchase A1
    ///      │
    ///      ├── "A1" not a slot?       → "There is no item located at A1…"
    ///      ├── A1 empty?              → "Out of stock! …"
    ///      ├── balance < A1's price?  → "Insufficient funds. …"
    ///      │
    ///      └── stock − 1, balance − price, purchase logged
    ///          "Purchased Gatorade (Blue) for 1.75. …"
    /// ```
    pub fn purchase_item(
        &mut self,
        position: &str,
        reporter: &mut dyn Reporter,
    ) -> CoreResult<PurchaseReceipt> {
        let result = self.try_purchase(position);

        emit(reporter, result, |receipt| {
            Report::success(format!(
                "Purchased {} for {}. Your remaining balance is {}. Enjoy!",
                receipt.name, receipt.price, receipt.balance
            ))
        })
    }

    fn try_purchase(&mut self, label: &str) -> CoreResult<PurchaseReceipt> {
        let no_such_slot = || CoreError::NoSuchSlot {
            position: label.trim().to_string(),
        };

        let position: Position = label.parse().map_err(|_| no_such_slot())?;
        let item = self.items.get_mut(&position).ok_or_else(no_such_slot)?;

        // Item::purchase only touches stock on success, so every early
        // return above and here leaves the machine as it was.
        let balance = item.purchase(self.balance)?;

        self.balance = balance;
        self.purchases.push(Purchase::new(position, item.price()));

        Ok(PurchaseReceipt {
            position,
            name: item.name().to_string(),
            price: item.price(),
            balance,
        })
    }

    /// Returns all inserted money and resets the balance to zero. Always
    /// succeeds, even with nothing to return.
    pub fn dispense_change(&mut self, reporter: &mut dyn Reporter) -> Money {
        let change = self.balance;
        self.balance = Money::zero();

        reporter.report(Report::success(format!(
            "Dispensed {}. Have a good day!",
            change
        )));
        change
    }

    // =========================================================================
    // Read-Only Operations
    // =========================================================================

    /// Reports the current balance.
    pub fn view_balance(&self, reporter: &mut dyn Reporter) -> Money {
        reporter.report(Report::success(format!(
            "Your current balance is {}.",
            self.balance
        )));
        self.balance
    }

    /// Slots matching `filter`, in position order.
    ///
    /// A filter that matches nothing is an `InvalidLocation` error rather
    /// than an empty listing.
    pub fn slots(&self, filter: SlotFilter) -> CoreResult<impl Iterator<Item = SlotView<'_>> + '_> {
        if !self.items.keys().any(|position| filter.matches(position)) {
            return Err(CoreError::InvalidLocation {
                location: filter.describe(),
            });
        }

        Ok(self
            .items
            .iter()
            .filter(move |(position, _)| filter.matches(position))
            .map(|(position, item)| SlotView {
                position: *position,
                item,
            }))
    }

    /// Reports one line per matching slot, or one error. Returns how many
    /// slots were listed.
    pub fn view_items(&self, filter: SlotFilter, reporter: &mut dyn Reporter) -> CoreResult<usize> {
        match self.slots(filter) {
            Ok(slots) => {
                let mut listed = 0;
                for slot in slots {
                    reporter.report(Report::info(slot.to_string()));
                    listed += 1;
                }
                Ok(listed)
            }
            Err(err) => {
                reporter.report(Report::from(&err));
                Err(err)
            }
        }
    }

    /// Total spent and number of purchases.
    pub fn purchase_totals(&self) -> PurchaseTotals {
        PurchaseTotals {
            spent: self.purchases.iter().map(Purchase::price).sum(),
            count: self.purchases.len(),
        }
    }

    /// One line per purchase, oldest first: `"1: Oreos costs 0.50"`.
    pub fn purchase_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.purchases.iter().enumerate().map(move |(index, purchase)| {
            let name = self
                .items
                .get(&purchase.position())
                .map_or_else(|| purchase.position().to_string(), |item| item.name().to_string());

            format!("{}: {} costs {}", index + 1, name, purchase.price())
        })
    }

    /// Reports the header (always) followed by one line per purchase.
    pub fn view_purchases(&self, reporter: &mut dyn Reporter) -> PurchaseTotals {
        let totals = self.purchase_totals();

        reporter.report(Report::info(totals.to_string()));
        for line in self.purchase_lines() {
            reporter.report(Report::info(line));
        }

        totals
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Captures the full state.
    pub fn to_snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            balance: self.balance,
            items: self.items.clone(),
            purchases: self.purchases.clone(),
        }
    }

    /// Rebuilds a machine from a snapshot, rejecting states the machine could
    /// never have reached (negative balance, non-positive prices).
    pub fn from_snapshot(snapshot: MachineSnapshot) -> CoreResult<Self> {
        validate_balance(snapshot.balance)?;
        for item in snapshot.items.values() {
            validate_price(item.price())?;
        }

        Ok(VendingMachine {
            items: snapshot.items,
            balance: snapshot.balance,
            purchases: snapshot.purchases,
        })
    }
}

/// Reports `result` once, success or error, and passes it through.
fn emit<T>(
    reporter: &mut dyn Reporter,
    result: CoreResult<T>,
    on_success: impl FnOnce(&T) -> Report,
) -> CoreResult<T> {
    match &result {
        Ok(value) => reporter.report(on_success(value)),
        Err(err) => reporter.report(Report::from(err)),
    }
    result
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};
    use crate::report::Severity;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn pos(label: &str) -> Position {
        label.parse().unwrap()
    }

    /// A default machine with 10.00 already inserted.
    fn loaded() -> VendingMachine {
        let mut machine = VendingMachine::new();
        machine.deposit(money("10"), &mut Vec::new()).unwrap();
        machine
    }

    #[test]
    fn test_fresh_machine() {
        let machine = VendingMachine::new();

        assert_eq!(machine.balance().to_string(), "0.00");
        assert_eq!(machine.items().len(), 15);
        assert!(machine.purchases().is_empty());
    }

    // -------------------------------------------------------------------------
    // deposit
    // -------------------------------------------------------------------------

    #[test]
    fn test_deposit() {
        let mut machine = VendingMachine::new();
        let mut reports = Vec::new();

        let balance = machine.deposit(money("10"), &mut reports).unwrap();

        assert_eq!(balance.to_string(), "10.00");
        assert_eq!(machine.balance().to_string(), "10.00");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Success);
        assert!(reports[0].message.contains("10.00"));
    }

    #[test]
    fn test_deposits_accumulate() {
        let mut machine = VendingMachine::new();
        let mut reports = Vec::new();

        machine.deposit(money("0.25"), &mut reports).unwrap();
        machine.deposit(money("1.105"), &mut reports).unwrap();

        assert_eq!(machine.balance().to_string(), "1.36");
        assert_eq!(reports.len(), 2);
    }

    #[test]
    fn test_negative_deposit_is_rejected() {
        let mut machine = VendingMachine::new();
        let mut reports = Vec::new();

        let err = machine.deposit(money("-5"), &mut reports).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(machine.balance().to_string(), "0.00");
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].severity, Severity::Error);
    }

    #[test]
    fn test_deposit_past_the_limit_is_rejected() {
        let mut machine = VendingMachine::new();
        let mut reports = Vec::new();

        machine.deposit(money("1000000000000"), &mut reports).unwrap();
        let result = machine.deposit(money("0.01"), &mut reports);

        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(machine.balance().to_string(), "1000000000000.00");
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].severity, Severity::Error);
        assert!(reports[1].message.contains("amount must be between"));
    }

    #[test]
    fn test_zero_deposit_is_rejected() {
        let mut machine = VendingMachine::new();
        let mut reports = Vec::new();

        assert!(machine.deposit(Money::zero(), &mut reports).is_err());
        assert!(machine.balance().is_zero());
        assert_eq!(reports.len(), 1);
    }

    // -------------------------------------------------------------------------
    // purchase_item
    // -------------------------------------------------------------------------

    #[test]
    fn test_purchase_scenario_until_out_of_stock() {
        let mut machine = loaded();
        let mut reports = Vec::new();

        let receipt = machine.purchase_item("A1", &mut reports).unwrap();
        assert_eq!(receipt.name, "Gatorade (Blue)");
        assert_eq!(receipt.price.to_string(), "1.75");
        assert_eq!(machine.balance().to_string(), "8.25");
        assert_eq!(machine.item(&pos("A1")).unwrap().remaining_stock(), 2);
        assert_eq!(machine.purchases().len(), 1);

        machine.purchase_item("A1", &mut reports).unwrap();
        machine.purchase_item("A1", &mut reports).unwrap();
        assert_eq!(machine.item(&pos("A1")).unwrap().remaining_stock(), 0);
        let balance_before = machine.balance();

        let err = machine.purchase_item("A1", &mut reports).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfStock);
        assert_eq!(machine.balance(), balance_before);
        assert_eq!(machine.purchases().len(), 3);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[3].severity, Severity::Error);
        assert!(reports[3].message.contains("Gatorade (Blue)"));
    }

    #[test]
    fn test_purchase_without_money() {
        let mut machine = VendingMachine::new();
        let mut reports = Vec::new();

        let err = machine.purchase_item("B3", &mut reports).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InsufficientFunds);
        assert!(machine.purchases().is_empty());
        assert_eq!(machine.item(&pos("B3")).unwrap().remaining_stock(), 3);
        assert_eq!(reports.len(), 1);
        assert_eq!(
            reports[0].message,
            "Insufficient funds. Lays costs 1.00, but got 0.00."
        );
    }

    #[test]
    fn test_purchase_unknown_slot() {
        let mut machine = loaded();

        for label in ["F13", "A9", "a1", "", "1A"] {
            let mut reports = Vec::new();
            let err = machine.purchase_item(label, &mut reports).unwrap_err();

            assert!(matches!(err, CoreError::NoSuchSlot { .. }), "{label}");
            assert_eq!(reports.len(), 1);
        }
        assert_eq!(machine.balance().to_string(), "10.00");
        assert!(machine.purchases().is_empty());
    }

    #[test]
    fn test_purchase_logs_price_paid() {
        let mut machine = loaded();
        let mut reports = Vec::new();

        machine.purchase_item("B2", &mut reports).unwrap();
        machine.purchase_item("C4", &mut reports).unwrap();

        let logged: Vec<(String, String)> = machine
            .purchases()
            .iter()
            .map(|p| (p.position().to_string(), p.price().to_string()))
            .collect();
        assert_eq!(
            logged,
            vec![
                ("B2".to_string(), "0.50".to_string()),
                ("C4".to_string(), "0.25".to_string())
            ]
        );
        assert_eq!(machine.balance().to_string(), "9.25");
    }

    // -------------------------------------------------------------------------
    // dispense_change / view_balance
    // -------------------------------------------------------------------------

    #[test]
    fn test_dispense_change_twice() {
        let mut machine = loaded();
        let mut reports = Vec::new();

        assert_eq!(machine.dispense_change(&mut reports).to_string(), "10.00");
        assert_eq!(machine.balance().to_string(), "0.00");
        assert_eq!(machine.dispense_change(&mut reports).to_string(), "0.00");

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.severity == Severity::Success));
        assert!(reports[1].message.contains("0.00"));
    }

    #[test]
    fn test_view_balance() {
        let machine = loaded();
        let mut reports = Vec::new();

        assert_eq!(machine.view_balance(&mut reports).to_string(), "10.00");
        assert_eq!(reports, vec![Report::success("Your current balance is 10.00.")]);
    }

    // -------------------------------------------------------------------------
    // view_items
    // -------------------------------------------------------------------------

    #[test]
    fn test_view_all_items() {
        let machine = VendingMachine::new();
        let mut reports = Vec::new();

        assert_eq!(machine.view_items(SlotFilter::all(), &mut reports).unwrap(), 15);
        assert_eq!(
            reports[0].message,
            "A1: Gatorade (Blue) costs 1.75, and there are 3 units in stock."
        );
        assert!(reports[14].message.starts_with("C5: Trident"));
    }

    #[test]
    fn test_view_items_filters_are_additive() {
        let machine = VendingMachine::new();

        let column: Vec<String> = machine
            .slots(SlotFilter { column: Some(2), row: None })
            .unwrap()
            .map(|slot| slot.position.to_string())
            .collect();
        assert_eq!(column, vec!["B1", "B2", "B3", "B4", "B5"]);

        let row: Vec<String> = machine
            .slots(SlotFilter { column: None, row: Some(4) })
            .unwrap()
            .map(|slot| slot.position.to_string())
            .collect();
        assert_eq!(row, vec!["A4", "B4", "C4"]);

        let mut reports = Vec::new();
        let listed = machine.view_items(SlotFilter::at(pos("C2")), &mut reports).unwrap();
        assert_eq!(listed, 1);
        assert!(reports[0].message.starts_with("C2: KitKat"));
    }

    #[test]
    fn test_view_items_invalid_location() {
        let machine = VendingMachine::new();

        for (filter, location) in [
            (SlotFilter { column: Some(4), row: None }, "Column D"),
            (SlotFilter { column: None, row: Some(6) }, "Row 6"),
            (SlotFilter { column: Some(1), row: Some(9) }, "A9"),
            (SlotFilter { column: Some(27), row: Some(1) }, "271"),
        ] {
            let mut reports = Vec::new();
            let err = machine.view_items(filter, &mut reports).unwrap_err();

            assert_eq!(err.kind(), ErrorKind::InvalidLocation);
            assert_eq!(reports.len(), 1);
            assert_eq!(reports[0].severity, Severity::Error);
            assert!(reports[0].message.starts_with(location), "{}", reports[0].message);
        }
    }

    // -------------------------------------------------------------------------
    // view_purchases
    // -------------------------------------------------------------------------

    #[test]
    fn test_view_purchases_header_only_when_empty() {
        let machine = VendingMachine::new();
        let mut reports = Vec::new();

        let totals = machine.view_purchases(&mut reports);

        assert_eq!(totals.count, 0);
        assert_eq!(reports, vec![Report::info("You've spent 0.00 on 0 items.")]);
    }

    #[test]
    fn test_view_purchases_lists_in_order() {
        let mut machine = loaded();
        machine.purchase_item("A1", &mut Vec::new()).unwrap();
        machine.purchase_item("B2", &mut Vec::new()).unwrap();

        let mut reports = Vec::new();
        let totals = machine.view_purchases(&mut reports);

        assert_eq!(totals.spent.to_string(), "2.25");
        assert_eq!(totals.count, 2);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].message, "You've spent 2.25 on 2 items. You bought...");
        assert_eq!(reports[1].message, "1: Gatorade (Blue) costs 1.75");
        assert_eq!(reports[2].message, "2: Oreos costs 0.50");
    }

    // -------------------------------------------------------------------------
    // snapshots
    // -------------------------------------------------------------------------

    #[test]
    fn test_snapshot_round_trip() {
        let mut machine = loaded();
        machine.purchase_item("A1", &mut Vec::new()).unwrap();
        machine.purchase_item("C5", &mut Vec::new()).unwrap();
        machine.purchase_item("A1", &mut Vec::new()).unwrap();

        let json = serde_json::to_string(&machine.to_snapshot()).unwrap();
        let snapshot: MachineSnapshot = serde_json::from_str(&json).unwrap();
        let restored = VendingMachine::from_snapshot(snapshot).unwrap();

        assert_eq!(restored, machine);
        assert_eq!(restored.balance().to_string(), "6.25");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut machine = loaded();
        machine.purchase_item("A1", &mut Vec::new()).unwrap();

        let value = serde_json::to_value(machine.to_snapshot()).unwrap();

        assert_eq!(value["balance"], "8.25");
        assert_eq!(value["items"]["A1"]["price"], "1.75");
        assert_eq!(value["items"]["A1"]["remaining_stock"], 2);
        assert_eq!(value["purchases"][0]["position"], "A1");
        assert_eq!(value["purchases"][0]["price"], "1.75");
    }

    #[test]
    fn test_from_snapshot_rejects_impossible_state() {
        let mut snapshot = VendingMachine::new().to_snapshot();
        snapshot.balance = Money::from_cents(-100);
        assert!(VendingMachine::from_snapshot(snapshot).is_err());

        let json = r#"{"balance":"0.00","items":{"A1":{"name":"Air","price":"0.00","remaining_stock":1}},"purchases":[]}"#;
        let snapshot: MachineSnapshot = serde_json::from_str(json).unwrap();
        assert!(VendingMachine::from_snapshot(snapshot).is_err());
    }

    #[test]
    fn test_custom_layout() {
        let layout = MachineLayout::new(2, 2, 7).unwrap();
        let machine = VendingMachine::with_layout(CATALOG, layout);

        assert_eq!(machine.items().len(), 4);
        assert!(machine.items().values().all(|item| item.remaining_stock() == 7));
    }
}
