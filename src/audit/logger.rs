//! Append-only JSONL audit log
//!
//! Each entry is one JSON line, flushed as soon as it is written. Reading is
//! lenient: lines that do not parse are skipped so one damaged line cannot
//! hide the rest of the history.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;

use log::warn;

use crate::error::{FinlogError, FinlogResult};
use crate::models::Record;

use super::entry::AuditEntry;

/// Appends record mutations to a JSONL file next to the ledger
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record that `record` was saved
    pub fn log_create(&self, record: &Record) -> FinlogResult<()> {
        self.append(&AuditEntry::created(record))
    }

    /// Record that `record` was removed
    pub fn log_delete(&self, record: &Record) -> FinlogResult<()> {
        self.append(&AuditEntry::deleted(record))
    }

    fn append(&self, entry: &AuditEntry) -> FinlogResult<()> {
        let storage_err = |action: &str, e: std::io::Error| {
            FinlogError::Storage(format!(
                "Failed to {} audit log {}: {}",
                action,
                self.log_path.display(),
                e
            ))
        };

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| storage_err("open", e))?;
        file.write_all(line.as_bytes())
            .map_err(|e| storage_err("write", e))?;
        file.flush().map_err(|e| storage_err("flush", e))
    }

    /// The last `count` entries, oldest first
    ///
    /// A missing log has no entries. An unreadable log or an unparseable line
    /// is reported through `warn!` and skipped.
    pub fn recent(&self, count: usize) -> Vec<AuditEntry> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Cannot read audit log {}: {}", self.log_path.display(), e);
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading audit log at line {}: {}", index + 1, e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping audit log line {}: {}", index + 1, e),
            }
        }

        let start = entries.len().saturating_sub(count);
        entries.split_off(start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::RecordId;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(log_path(&temp_dir));
        (logger, temp_dir)
    }

    fn log_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("records.audit.log")
    }

    fn record(id: u64) -> Record {
        Record::new(RecordId::new(id), "Healthcare", 42.5, "Doctor", "2023-06-01")
    }

    #[test]
    fn test_log_and_read_back() {
        let (logger, _temp) = create_test_logger();
        logger.log_create(&record(1)).unwrap();
        logger.log_delete(&record(1)).unwrap();

        let entries = logger.recent(10);
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Delete]);
        assert_eq!(entries[1].record, record(1));
    }

    #[test]
    fn test_one_line_per_entry() {
        let (logger, temp) = create_test_logger();
        logger.log_create(&record(1)).unwrap();
        logger.log_create(&record(2)).unwrap();

        let contents = fs::read_to_string(log_path(&temp)).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn test_recent_keeps_the_newest() {
        let (logger, _temp) = create_test_logger();
        for id in 1..=10 {
            logger.log_create(&record(id)).unwrap();
        }

        let ids: Vec<_> = logger
            .recent(3)
            .iter()
            .map(|e| e.record.record_id().value())
            .collect();
        assert_eq!(ids, vec![8, 9, 10]);
        assert!(logger.recent(0).is_empty());
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (logger, temp) = create_test_logger();
        assert!(!log_path(&temp).exists());
        assert!(logger.recent(5).is_empty());
    }

    #[test]
    fn test_damaged_lines_are_skipped() {
        let (logger, temp) = create_test_logger();
        logger.log_create(&record(1)).unwrap();
        let mut file = OpenOptions::new().append(true).open(log_path(&temp)).unwrap();
        writeln!(file, "{{not json}}").unwrap();
        writeln!(file).unwrap();
        drop(file);
        logger.log_create(&record(2)).unwrap();

        let ids: Vec<_> = logger
            .recent(10)
            .iter()
            .map(|e| e.record.record_id().value())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_appends_across_instances() {
        let (logger, temp) = create_test_logger();
        logger.log_create(&record(1)).unwrap();

        let reopened = AuditLogger::new(log_path(&temp));
        reopened.log_delete(&record(1)).unwrap();
        assert_eq!(reopened.recent(10).len(), 2);
    }

    #[test]
    fn test_unwritable_log_is_a_storage_error() {
        let (logger, temp) = create_test_logger();
        fs::create_dir(log_path(&temp)).unwrap();

        let err = logger.log_create(&record(1)).unwrap_err();
        assert!(matches!(err, FinlogError::Storage(_)));
        assert!(logger.recent(5).is_empty());
    }
}
