//! Path management for finlog
//!
//! All files live next to the ledger file.
//!
//! ## Ledger Path Resolution Order
//!
//! 1. Explicit path (the `--file` flag)
//! 2. `FINLOG_RECORDS_FILE` environment variable (if set)
//! 3. `records.json` in the current directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the ledger file location
pub const RECORDS_FILE_ENV: &str = "FINLOG_RECORDS_FILE";

/// Default ledger file name
pub const DEFAULT_RECORDS_FILE: &str = "records.json";

/// Name of the settings file, stored beside the ledger
pub const SETTINGS_FILE: &str = "finlog.json";

/// Manages all paths used by finlog
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    records_file: PathBuf,
}

impl LedgerPaths {
    /// Create paths for an explicit ledger file (useful for testing)
    pub fn new(records_file: PathBuf) -> Self {
        Self { records_file }
    }

    /// Resolve the ledger file from an optional explicit path, the
    /// environment, or the default
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let records_file = explicit
            .or_else(|| std::env::var_os(RECORDS_FILE_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_FILE));

        Self { records_file }
    }

    /// Get the ledger file path
    pub fn records_file(&self) -> &Path {
        &self.records_file
    }

    /// Directory containing the ledger file
    pub fn base_dir(&self) -> PathBuf {
        match self.records_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir().join(SETTINGS_FILE)
    }

    /// Get the path to the audit log (`records.json` -> `records.audit.log`)
    pub fn audit_log(&self) -> PathBuf {
        self.records_file.with_extension("audit.log")
    }
}
