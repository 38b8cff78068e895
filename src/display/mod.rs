//! Display formatting for terminal output

pub mod record;

pub use record::{format_record_block, format_record_listing, SEPARATOR_WIDTH};
