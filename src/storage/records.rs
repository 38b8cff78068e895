//! Record store backed by a single JSON file
//!
//! The store owns both the path of the ledger file and the in-memory copy of
//! its contents. Every mutation rewrites the whole file.

use std::path::PathBuf;

use log::{debug, warn};

use crate::error::FinlogError;
use crate::models::{Record, RecordId};

use super::file_io::{read_json, write_json, LoadOutcome};

/// In-memory mirror of the ledger file
pub struct RecordStore {
    path: PathBuf,
    data: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store for the given file without touching disk
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: Vec::new(),
        }
    }

    /// Create a store and load the file
    pub fn open(path: PathBuf) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Replace the in-memory ledger with the file contents
    ///
    /// A missing file and a corrupt file both leave the ledger empty. The
    /// corrupt contents are overwritten by the next save.
    pub fn load(&mut self) -> LoadOutcome<usize> {
        let outcome = read_json::<Vec<Record>, _>(&self.path);

        if let LoadOutcome::Corrupt(reason) = &outcome {
            warn!("Discarding unreadable ledger: {}", reason);
        }

        let outcome = outcome.map(|records| {
            self.data = records;
            self.data.len()
        });
        if !outcome.is_loaded() {
            self.data.clear();
        }

        debug!("Loaded {} records from {}", self.data.len(), self.path.display());
        outcome
    }

    /// Write the whole ledger to disk
    pub fn save_all(&self) -> Result<(), FinlogError> {
        debug!("Writing {} records to {}", self.data.len(), self.path.display());
        write_json(&self.path, &self.data)
    }

    /// Append a record and save
    ///
    /// Id uniqueness is the caller's responsibility. If the write fails the
    /// record is dropped again, so memory keeps matching the file.
    pub fn add(&mut self, record: Record) -> Result<(), FinlogError> {
        self.data.push(record);
        if let Err(e) = self.save_all() {
            self.data.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove every record with the given id and save
    ///
    /// Returns the removed record, if there was one. Removing an unknown id
    /// still rewrites the file.
    pub fn remove(&mut self, id: RecordId) -> Result<Option<Record>, FinlogError> {
        let removed = self.data.iter().find(|r| r.record_id() == id).cloned();
        let previous = self.data.clone();
        self.data.retain(|r| r.record_id() != id);
        if let Err(e) = self.save_all() {
            self.data = previous;
            return Err(e);
        }
        Ok(removed)
    }

    /// Copy of all records in insertion order
    pub fn all(&self) -> Vec<Record> {
        self.data.clone()
    }

    /// Highest id in the ledger, or zero when empty
    pub fn max_id(&self) -> RecordId {
        self.data
            .iter()
            .map(Record::record_id)
            .max()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
