//! Audit logging for finlog
//!
//! Every record created or deleted is appended to a line-delimited JSON
//! audit log next to the ledger file. The ledger itself keeps no history,
//! so this is the only trace of deleted records.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
