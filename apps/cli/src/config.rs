//! # CLI Configuration
//!
//! Where the machine is stored, how big a fresh machine is, and whether
//! output is colored.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --state-file ./state.json   --color never                          │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     VEND_STATE_FILE  VEND_ROWS  VEND_COLUMNS  VEND_STOCK  NO_COLOR     │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/vend/config.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.vend.vend/config.toml (macOS)    │
//! │     or --config <path> / VEND_CONFIG                                   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     5 rows × 3 columns, 3 units each, state in the data directory      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # config.toml
//! [machine]
//! rows = 5
//! columns = 3
//! stock = 3
//!
//! [storage]
//! state_file = "/var/lib/vend/state.json"
//! pretty = true
//!
//! [output]
//! color = "auto"  # auto | always | never
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vend_core::{MachineLayout, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_STOCK};
use vend_store::config::DEFAULT_FILE_NAME;
use vend_store::StoreConfig;

use crate::error::{CliError, CliResult};

/// Snapshot file used when no platform data directory can be found.
const FALLBACK_STATE_FILE: &str = "vend-state.json";

// =============================================================================
// Color Choice
// =============================================================================

/// Color output mode for terminal rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Installs this choice as the process-wide color override.
    pub fn apply(self) {
        match self {
            ColorChoice::Auto => owo_colors::unset_override(),
            ColorChoice::Always => owo_colors::set_override(true),
            ColorChoice::Never => owo_colors::set_override(false),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Size of a freshly started machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    #[serde(default = "default_rows")]
    pub rows: u32,

    /// Between 1 and 26.
    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Units placed in each slot.
    #[serde(default = "default_stock")]
    pub stock: u32,
}

fn default_rows() -> u32 {
    DEFAULT_ROWS
}
fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}
fn default_stock() -> u32 {
    DEFAULT_STOCK
}

impl MachineSettings {
    /// Checked layout for `start` and `rebuild`. Other commands ignore
    /// these settings, so a bad value only matters when building.
    pub fn layout(&self) -> CliResult<MachineLayout> {
        MachineLayout::new(self.rows, self.columns, self.stock)
            .map_err(|e| CliError::config(e.to_string()))
    }
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            rows: default_rows(),
            columns: default_columns(),
            stock: default_stock(),
        }
    }
}

/// Where and how the snapshot is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Snapshot file. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,

    /// Indent the snapshot JSON.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            state_file: None,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub color: ColorChoice,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub machine: MachineSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the default one may not)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parses one TOML file. Missing sections and keys take their defaults.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");

        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("could not read {}: {}", path.display(), e)))?;

        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Some(path) = env_var("VEND_STATE_FILE") {
            debug!(state_file = %path, "Overriding state file from environment");
            self.storage.state_file = Some(PathBuf::from(path));
        }

        for (name, slot) in [
            ("VEND_ROWS", &mut self.machine.rows),
            ("VEND_COLUMNS", &mut self.machine.columns),
            ("VEND_STOCK", &mut self.machine.stock),
        ] {
            if let Some(value) = env_var(name) {
                match value.trim().parse::<u32>() {
                    Ok(parsed) => {
                        debug!(var = name, value = parsed, "Overriding machine size from environment");
                        *slot = parsed;
                    }
                    Err(_) => warn!(var = name, value = %value, "Ignoring non-numeric value in environment"),
                }
            }
        }

        // https://no-color.org: any non-empty value disables color
        if env_var("NO_COLOR").is_some() {
            self.output.color = ColorChoice::Never;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vend", "vend")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Where the snapshot lives.
    pub fn state_file(&self) -> PathBuf {
        self.storage.state_file.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("com", "vend", "vend")
                .map(|dirs| dirs.data_dir().join(DEFAULT_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(FALLBACK_STATE_FILE))
        })
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.state_file()).pretty(self.storage.pretty)
    }
}

/// A set, non-empty environment variable.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
