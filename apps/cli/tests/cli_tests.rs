//! End-to-end tests for the `vend` binary.
//!
//! Every test gets its own scratch directory holding an empty config file
//! and the snapshot, so nothing touches the real user directories.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Sandbox { dir }
    }

    fn state_file(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    fn vend(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("vend");
        cmd.env("VEND_CONFIG", self.dir.path().join("config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("VEND_STATE_FILE")
            .env_remove("VEND_ROWS")
            .env_remove("VEND_COLUMNS")
            .env_remove("VEND_STOCK")
            .env_remove("RUST_LOG")
            .arg("--state-file")
            .arg(self.state_file());
        cmd
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.vend().args(args).assert().success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    }

    fn started() -> Self {
        let sandbox = Sandbox::new();
        sandbox.run_ok(&["start"]);
        sandbox
    }
}

#[test]
fn test_help() {
    cargo_bin_cmd!("vend")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("add-money"))
        .stdout(predicate::str::contains("dispense-change"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("vend")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vend"));
}

// -----------------------------------------------------------------------------
// lifecycle
// -----------------------------------------------------------------------------

#[test]
fn test_start_creates_state_file() {
    let sandbox = Sandbox::new();
    assert!(!sandbox.state_file().exists());

    sandbox
        .vend()
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: Vending machine created."));

    assert!(sandbox.state_file().is_file());
}

#[test]
fn test_start_keeps_existing_machine() {
    let sandbox = Sandbox::started();
    sandbox.run_ok(&["add-money", "5"]);

    sandbox
        .vend()
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "INFO: An existing vending machine exists. Proceeding with that.",
        ));

    let out = sandbox.run_ok(&["view-balance"]);
    assert!(out.contains("Your current balance is 5.00."));
}

#[test]
fn test_destroy() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .arg("destroy")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: Vending machine destroyed."));
    assert!(!sandbox.state_file().exists());

    sandbox
        .vend()
        .arg("destroy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Doing nothing."));
}

#[test]
fn test_rebuild_resets_everything() {
    let sandbox = Sandbox::started();
    sandbox.run_ok(&["add-money", "10"]);
    sandbox.run_ok(&["purchase", "A1"]);

    sandbox
        .vend()
        .arg("rebuild")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vending machine rebuilt."));

    assert!(sandbox.run_ok(&["view-balance"]).contains("0.00"));
    assert!(sandbox
        .run_ok(&["view-items", "-p", "A1"])
        .contains("there are 3 units in stock"));
}

#[test]
fn test_commands_before_start() {
    let sandbox = Sandbox::new();

    for args in [
        vec!["view-items"],
        vec!["add-money", "1"],
        vec!["purchase", "A1"],
        vec!["view-balance"],
        vec!["view-purchases"],
        vec!["dispense-change"],
    ] {
        sandbox
            .vend()
            .args(&args)
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "ERROR: Please initialize the vending machine first.",
            ));
    }
    assert!(!sandbox.state_file().exists());
}

// -----------------------------------------------------------------------------
// money and purchases
// -----------------------------------------------------------------------------

#[test]
fn test_purchase_session() {
    let sandbox = Sandbox::started();

    let out = sandbox.run_ok(&["add-money", "10"]);
    assert!(out.contains("Successfully deposited 10.00. Your balance is now 10.00."));

    let out = sandbox.run_ok(&["purchase", "A1"]);
    assert!(out.contains(
        "SUCCESS: Purchased Gatorade (Blue) for 1.75. Your remaining balance is 8.25. Enjoy!"
    ));

    let out = sandbox.run_ok(&["view-purchases"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("You've spent 1.75 on 1 items. You bought..."));
    assert!(lines[1].ends_with("1: Gatorade (Blue) costs 1.75"));

    let out = sandbox.run_ok(&["dispense-change"]);
    assert!(out.contains("Dispensed 8.25. Have a good day!"));

    let out = sandbox.run_ok(&["view-balance"]);
    assert!(out.contains("Your current balance is 0.00."));
}

#[test]
fn test_out_of_stock() {
    let sandbox = Sandbox::started();
    sandbox.run_ok(&["add-money", "20"]);
    for _ in 0..3 {
        sandbox.run_ok(&["purchase", "C5"]);
    }

    sandbox
        .vend()
        .args(["purchase", "C5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Out of stock! There are no more Trident left!",
        ));

    let out = sandbox.run_ok(&["view-balance"]);
    assert!(out.contains("19.25"));
}

#[test]
fn test_insufficient_funds() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .args(["purchase", "B3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Insufficient funds. Lays costs 1.00, but got 0.00.",
        ));
}

#[test]
fn test_unknown_slot() {
    let sandbox = Sandbox::started();
    sandbox.run_ok(&["add-money", "5"]);

    sandbox
        .vend()
        .args(["purchase", "F13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is no item located at F13. Please try again!",
        ));
}

#[test]
fn test_negative_deposit() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .args(["add-money", "-5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't add negative or 0 cents"));

    assert!(sandbox.run_ok(&["view-balance"]).contains("0.00"));
}

#[test]
fn test_deposit_rounds_half_up() {
    let sandbox = Sandbox::started();

    let out = sandbox.run_ok(&["add-money", "1.005"]);
    assert!(out.contains("Your balance is now 1.01."));
}

#[test]
fn test_huge_deposits_are_refused() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .args(["add-money", "50000000000000000000000000000"])
        .assert()
        .failure()
        .code(2);

    sandbox.run_ok(&["add-money", "1000000000000"]);
    sandbox
        .vend()
        .args(["add-money", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("amount must be between"));

    let out = sandbox.run_ok(&["view-balance"]);
    assert!(out.contains("Your current balance is 1000000000000.00."));
}

#[test]
fn test_non_numeric_amount_is_a_usage_error() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .args(["add-money", "ten"])
        .assert()
        .failure()
        .code(2);
}

// -----------------------------------------------------------------------------
// view-items
// -----------------------------------------------------------------------------

#[test]
fn test_view_all_items() {
    let sandbox = Sandbox::started();

    let out = sandbox.run_ok(&["view-items"]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 15);
    assert!(lines[0].contains("INFO: A1: Gatorade (Blue) costs 1.75, and there are 3 units in stock."));
    assert!(lines[14].contains("C5: Trident"));
}

#[test]
fn test_view_items_row_and_column() {
    let sandbox = Sandbox::started();

    let out = sandbox.run_ok(&["view-items", "-c", "A", "-r", "1"]);
    assert_eq!(out.lines().count(), 1);

    let out = sandbox.run_ok(&["view-items", "--row", "2"]);
    assert_eq!(out.lines().count(), 3);

    let out = sandbox.run_ok(&["view-items", "--column", "b"]);
    assert_eq!(out.lines().count(), 5);
}

#[test]
fn test_view_items_position() {
    let sandbox = Sandbox::started();

    let out = sandbox.run_ok(&["view-items", "-p", "B2"]);
    assert_eq!(out.lines().count(), 1);
    assert!(out.contains("B2: Oreos costs 0.50"));
}

#[test]
fn test_view_items_invalid_location() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .args(["view-items", "-c", "D"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Column D isn't a slot on this machine."));

    sandbox
        .vend()
        .args(["view-items", "-r", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 6 isn't a slot on this machine."));
}

// -----------------------------------------------------------------------------
// configuration and storage
// -----------------------------------------------------------------------------

#[test]
fn test_layout_from_environment() {
    let sandbox = Sandbox::new();

    sandbox
        .vend()
        .env("VEND_ROWS", "2")
        .env("VEND_COLUMNS", "2")
        .env("VEND_STOCK", "7")
        .arg("start")
        .assert()
        .success();

    let out = sandbox.run_ok(&["view-items"]);
    assert_eq!(out.lines().count(), 4);
    assert!(out.contains("there are 7 units in stock"));
}

#[test]
fn test_layout_from_config_file() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.dir.path().join("config.toml"),
        "[machine]\nrows = 1\ncolumns = 3\n",
    )
    .unwrap();

    sandbox.run_ok(&["start"]);

    let out = sandbox.run_ok(&["view-items"]);
    assert_eq!(out.lines().count(), 3);
}

#[test]
fn test_invalid_layout_is_a_config_error() {
    let sandbox = Sandbox::new();

    sandbox
        .vend()
        .env("VEND_COLUMNS", "27")
        .arg("start")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"));

    assert!(!sandbox.state_file().exists());
}

#[test]
fn test_bad_layout_does_not_block_existing_machine() {
    let sandbox = Sandbox::started();

    sandbox
        .vend()
        .env("VEND_COLUMNS", "30")
        .arg("view-balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your current balance is 0.00."));

    sandbox
        .vend()
        .env("VEND_COLUMNS", "30")
        .arg("rebuild")
        .assert()
        .failure()
        .code(2);
    assert!(sandbox.state_file().is_file());
}

#[test]
fn test_state_file_format() {
    let sandbox = Sandbox::started();
    sandbox.run_ok(&["add-money", "10"]);
    sandbox.run_ok(&["purchase", "A1"]);

    let contents = fs::read_to_string(sandbox.state_file()).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(snapshot["balance"], "8.25");
    assert_eq!(snapshot["items"]["A1"]["name"], "Gatorade (Blue)");
    assert_eq!(snapshot["items"]["A1"]["remaining_stock"], 2);
    assert_eq!(snapshot["purchases"][0]["position"], "A1");
    assert_eq!(snapshot["purchases"][0]["price"], "1.75");
}

#[test]
fn test_corrupt_state_file() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.state_file(), "not json").unwrap();

    sandbox
        .vend()
        .arg("view-balance")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("corrupt"));
}
