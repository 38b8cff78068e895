//! Service layer for finlog
//!
//! Business logic sits between the CLI and storage: id assignment,
//! validation, and audit logging.

pub mod record;

pub use record::{CreateRecordInput, RecordService};
