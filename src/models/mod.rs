//! Core data models for finlog
//!
//! A ledger is an ordered list of immutable expense records, each identified
//! by a sequential [`RecordId`].

pub mod ids;
pub mod record;

pub use ids::RecordId;
pub use record::{Record, SortOrder};
