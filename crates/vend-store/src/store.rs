//! # Snapshot Stores
//!
//! Load and save the whole machine as one document.
//!
//! ## Save Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    JsonFileStore::save                                  │
//! │                                                                         │
//! │  VendingMachine ──to_snapshot()──► MachineSnapshot                     │
//! │                                          │ serde_json                   │
//! │                                          ▼                              │
//! │                                  state.json.tmp   (full write + sync)   │
//! │                                          │ rename                       │
//! │                                          ▼                              │
//! │                                  state.json       (old content gone)    │
//! │                                                                         │
//! │  A crash before the rename leaves the previous state.json intact.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Load Cycle
//! ```text
//! state.json ──read──► serde_json ──► MachineSnapshot ──from_snapshot()──► VendingMachine
//!     │                    │                                  │
//!     ▼                    ▼                                  ▼
//!  NotFound             Corrupt                            Invalid
//! ```
//!
//! Single writer only: two processes saving at once race, and the last
//! rename wins.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vend_core::{MachineSnapshot, VendingMachine};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// The persistence collaborator.
///
/// `save` always replaces whatever was stored before.
pub trait SnapshotStore {
    /// Loads the stored machine, or `StoreError::NotFound` if there is none.
    fn load(&self) -> StoreResult<VendingMachine>;

    /// Stores `machine`, replacing any previous snapshot.
    fn save(&self, machine: &VendingMachine) -> StoreResult<()>;

    /// Whether a snapshot is stored.
    fn exists(&self) -> bool;

    /// Removes the snapshot. Returns `false` if there was nothing to remove.
    fn delete(&self) -> StoreResult<bool>;
}

// =============================================================================
// JSON File Store
// =============================================================================

/// Keeps the snapshot in a single JSON file.
///
/// ## Usage
/// ```rust,no_run
/// use vend_core::VendingMachine;
/// use vend_store::{JsonFileStore, SnapshotStore, StoreConfig};
///
/// # fn main() -> Result<(), vend_store::StoreError> {
/// let store = JsonFileStore::new(StoreConfig::new("state.json"));
///
/// if !store.exists() {
///     store.save(&VendingMachine::new())?;
/// }
/// let machine = store.load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StoreConfig,
}

impl JsonFileStore {
    /// Creates a store for the configured file. Nothing is touched on disk
    /// until the first operation.
    pub fn new(config: StoreConfig) -> Self {
        JsonFileStore { config }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn encode(&self, snapshot: &MachineSnapshot) -> StoreResult<Vec<u8>> {
        let mut bytes = if self.config.pretty {
            serde_json::to_vec_pretty(snapshot)
        } else {
            serde_json::to_vec(snapshot)
        }
        .map_err(StoreError::Encode)?;

        bytes.push(b'\n');
        Ok(bytes)
    }

    fn write_temp(&self, temp: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(temp)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> StoreResult<VendingMachine> {
        let path = self.path();
        debug!(path = %path.display(), "Loading snapshot");

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                path: path.to_path_buf(),
            },
            _ => StoreError::io(path, e),
        })?;

        let snapshot: MachineSnapshot =
            serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;

        let machine = VendingMachine::from_snapshot(snapshot)?;

        debug!(
            path = %path.display(),
            slots = machine.items().len(),
            purchases = machine.purchases().len(),
            "Snapshot loaded"
        );

        Ok(machine)
    }

    fn save(&self, machine: &VendingMachine) -> StoreResult<()> {
        let path = self.path();
        let temp = self.config.temp_path();

        if self.config.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let bytes = self.encode(&machine.to_snapshot())?;

        if let Err(e) = self.write_temp(&temp, &bytes) {
            // Cleanup failure is ignored; the write error is returned.
            let _ = fs::remove_file(&temp);
            return Err(StoreError::io(&temp, e));
        }

        fs::rename(&temp, path).map_err(|e| StoreError::io(path, e))?;

        info!(
            path = %path.display(),
            bytes = bytes.len(),
            balance = %machine.balance(),
            "Snapshot saved"
        );

        Ok(())
    }

    fn exists(&self) -> bool {
        self.path().is_file()
    }

    fn delete(&self) -> StoreResult<bool> {
        let path = self.path();

        match fs::remove_file(path) {
            Ok(()) => {
                info!(path = %path.display(), "Snapshot deleted");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No snapshot to delete");
                Ok(false)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to delete snapshot");
                Err(StoreError::io(path, e))
            }
        }
    }
}

// =============================================================================
// Memory Store
// =============================================================================

/// Keeps the snapshot in memory. Goes through the same snapshot conversion
/// as the file store, so what comes back out is a fresh machine, not the
/// one that went in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Option<MachineSnapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store that already holds `machine`.
    pub fn with_machine(machine: &VendingMachine) -> Self {
        MemoryStore {
            snapshot: RefCell::new(Some(machine.to_snapshot())),
        }
    }

    fn label() -> PathBuf {
        PathBuf::from("<memory>")
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> StoreResult<VendingMachine> {
        let snapshot = self
            .snapshot
            .borrow()
            .clone()
            .ok_or_else(|| StoreError::NotFound {
                path: MemoryStore::label(),
            })?;

        Ok(VendingMachine::from_snapshot(snapshot)?)
    }

    fn save(&self, machine: &VendingMachine) -> StoreResult<()> {
        *self.snapshot.borrow_mut() = Some(machine.to_snapshot());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.snapshot.borrow().is_some()
    }

    fn delete(&self) -> StoreResult<bool> {
        Ok(self.snapshot.borrow_mut().take().is_some())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
