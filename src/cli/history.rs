//! Audit history command

use crate::error::FinlogResult;
use crate::storage::Storage;

/// Print the most recent audit entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> FinlogResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let entries = logger.recent(limit);
    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
