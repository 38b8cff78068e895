//! Record service
//!
//! Assigns ids, validates input, and routes every mutation through the
//! record store and the audit log.

use crate::error::{FinlogError, FinlogResult};
use crate::models::{Record, RecordId, SortOrder};
use crate::storage::Storage;
use crate::validate;

/// Input for creating a new record
///
/// `cost` and `date` are expected to be validated already, but are checked
/// again here since non-interactive callers hand over raw arguments.
#[derive(Debug, Clone)]
pub struct CreateRecordInput {
    pub category: String,
    pub cost: f64,
    pub tag: String,
    pub date: String,
}

/// Service for record management
pub struct RecordService<'a> {
    storage: &'a mut Storage,
    last_id: RecordId,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    ///
    /// The last assigned id is derived from the ledger contents rather than
    /// stored separately.
    pub fn new(storage: &'a mut Storage) -> Self {
        let last_id = storage.records.max_id();
        Self { storage, last_id }
    }

    /// The most recently assigned id (zero before any record exists)
    pub fn last_id(&self) -> RecordId {
        self.last_id
    }

    /// Create and persist a record
    ///
    /// The category is trimmed and capitalized, the tag trimmed. The id is
    /// only consumed once the ledger write succeeds.
    pub fn create(&mut self, input: CreateRecordInput) -> FinlogResult<Record> {
        if !input.cost.is_finite() {
            return Err(FinlogError::Validation(format!(
                "Amount must be a finite number: {}",
                input.cost
            )));
        }
        let date = validate::parse_date(&input.date)?;

        let id = self.last_id.next()?;
        let record = Record::new(
            id,
            validate::capitalize(input.category.trim()),
            input.cost,
            input.tag.trim(),
            date,
        );

        self.storage.records.add(record.clone())?;
        self.last_id = id;
        self.storage.log_create(&record);

        Ok(record)
    }

    /// Delete a record by id
    ///
    /// Deleting an unknown id is not an error; `None` is returned and the
    /// ledger is left as it was.
    pub fn delete(&mut self, id: RecordId) -> FinlogResult<Option<Record>> {
        let removed = self.storage.records.remove(id)?;

        if let Some(record) = &removed {
            self.storage.log_delete(record);
        }

        Ok(removed)
    }

    /// All records in the requested order
    pub fn list(&self, order: SortOrder) -> Vec<Record> {
        let mut records = self.storage.records.all();
        order.apply(&mut records);
        records
    }

    /// Check whether the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.storage.records.is_empty()
    }
}
