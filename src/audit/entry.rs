//! Audit entries for record mutations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Record;

/// A ledger mutation worth remembering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// One line of the audit log: what happened to which record, and when
///
/// Records are immutable, so a single snapshot describes the record both
/// for a create (as saved) and a delete (as removed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub record: Record,
}

impl AuditEntry {
    /// Entry for a record that was just saved
    pub fn created(record: &Record) -> Self {
        Self::now(Operation::Create, record)
    }

    /// Entry for a record that was just removed
    pub fn deleted(record: &Record) -> Self {
        Self::now(Operation::Delete, record)
    }

    fn now(operation: Operation, record: &Record) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            record: record.clone(),
        }
    }

    /// `[2024-01-01 10:00:00 UTC] CREATE Record 3 (Healthcare)`
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} Record {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.record.record_id(),
            self.record.category()
        )
    }
}
