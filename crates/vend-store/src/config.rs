//! # Store Configuration
//!
//! Where the snapshot lives and how it is written.

use std::path::{Path, PathBuf};

/// File name used when only a directory is known.
pub const DEFAULT_FILE_NAME: &str = "state.json";

/// Snapshot store configuration.
///
/// ## Example
/// ```rust
/// use vend_store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/vend/state.json").pretty(false);
/// assert_eq!(config.temp_path().to_str(), Some("/tmp/vend/state.json.tmp"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the snapshot file.
    pub path: PathBuf,

    /// Indent the JSON so it can be read and hand-edited.
    /// Default: true
    pub pretty: bool,

    /// Create missing parent directories on save.
    /// Default: true
    pub create_dirs: bool,
}

impl StoreConfig {
    /// Creates a configuration for the snapshot at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            pretty: true,
            create_dirs: true,
        }
    }

    /// Snapshot named [`DEFAULT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        StoreConfig::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    /// Sets whether the JSON is indented.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets whether missing parent directories are created on save.
    pub fn create_dirs(mut self, create: bool) -> Self {
        self.create_dirs = create;
        self
    }

    /// Sibling file a save writes to before renaming over `path`.
    pub fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
