//! Storage layer for finlog
//!
//! Provides the JSON-backed record store plus the audit log that records
//! every mutation made through it.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, write_json, LoadOutcome};
pub use records::RecordStore;

use log::warn;

use crate::audit::AuditLogger;
use crate::config::paths::LedgerPaths;
use crate::config::settings::Settings;
use crate::models::Record;

/// Storage coordinator owning the record store and the audit log
pub struct Storage {
    pub records: RecordStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Open storage for the given paths and load the ledger
    pub fn open(paths: LedgerPaths, settings: &Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            records: RecordStore::open(paths.records_file().to_path_buf()),
            audit,
        }
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Note a saved record in the audit log
    ///
    /// The ledger write has already succeeded at this point, so an audit
    /// failure is logged and otherwise ignored.
    pub fn log_create(&self, record: &Record) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_create(record) {
                warn!("Record {} saved but not audited: {}", record.record_id(), e);
            }
        }
    }

    /// Note a removed record in the audit log; failures are only logged
    pub fn log_delete(&self, record: &Record) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log_delete(record) {
                warn!("Record {} deleted but not audited: {}", record.record_id(), e);
            }
        }
    }
}
