//! Record model
//!
//! A record is one expense entry in the ledger. Records are never edited
//! after creation; the only lifecycle events are creation and deletion.

use serde::{Deserialize, Serialize};

use super::ids::RecordId;

/// One expense entry
///
/// Serializes to exactly the keys `record_id`, `category`, `cost`, `tag`
/// and `date`, which is the on-disk format of the ledger file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    record_id: RecordId,
    category: String,
    cost: f64,
    tag: String,
    date: String,
}

impl Record {
    /// Create a new record
    ///
    /// No validation happens here; callers run input through the
    /// `validate` module first.
    pub fn new(
        record_id: RecordId,
        category: impl Into<String>,
        cost: f64,
        tag: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            record_id,
            category: category.into(),
            cost,
            tag: tag.into(),
            date: date.into(),
        }
    }

    pub fn record_id(&self) -> RecordId {
        self.record_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Date in `YYYY-MM-DD` form (shape-checked only)
    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Ordering applied when listing records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Lexicographic by date string
    Date,
    /// Lexicographic by category string
    Category,
    /// Insertion order
    #[default]
    Insertion,
}

impl SortOrder {
    /// Map a menu answer to a sort order
    ///
    /// `1` is date, `2` is category; anything else, including garbage,
    /// keeps insertion order.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Self::Date,
            "2" => Self::Category,
            _ => Self::Insertion,
        }
    }

    /// Sort records in place. Sorting is stable, so ties keep insertion order.
    pub fn apply(&self, records: &mut [Record]) {
        match self {
            Self::Date => records.sort_by(|a, b| a.date.cmp(&b.date)),
            Self::Category => records.sort_by(|a, b| a.category.cmp(&b.category)),
            Self::Insertion => {}
        }
    }
}
