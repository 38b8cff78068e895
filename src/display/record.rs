//! Record display formatting
//!
//! A listing is a sequence of labelled blocks, each opened by a separator
//! line, with one more separator closing the whole listing.

use crate::models::Record;

/// Width of the dashed separator line
pub const SEPARATOR_WIDTH: usize = 40;

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format one record as a labelled block (no separators)
pub fn format_record_block(record: &Record, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("ID       : {}\n", record.record_id()));
    output.push_str(&format!("Category : {}\n", record.category()));
    output.push_str(&format!("Cost     : {}{:.2}\n", currency_symbol, record.cost()));
    output.push_str(&format!("Tag      : {}\n", record.tag()));
    output.push_str(&format!("Date     : {}\n", record.date()));

    output
}

/// Format records as a framed listing, or a notice when there are none
pub fn format_record_listing(records: &[Record], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No records found.\n".to_string();
    }

    let mut output = String::new();
    for record in records {
        output.push_str(&separator());
        output.push('\n');
        output.push_str(&format_record_block(record, currency_symbol));
    }
    output.push_str(&separator());
    output.push('\n');

    output
}
