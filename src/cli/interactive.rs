//! Interactive menu mode
//!
//! The menu loop and the prompt-driven add, delete and view flows.

use std::io::{BufRead, Write};

use crate::display::format_record_listing;
use crate::error::FinlogResult;
use crate::models::{RecordId, SortOrder};
use crate::services::{CreateRecordInput, RecordService};
use crate::validate;

use super::prompt::Prompter;

/// Categories suggested when adding a record. Any text is accepted.
pub const SUGGESTED_CATEGORIES: [&str; 4] =
    ["Healthcare", "Entertainment", "Subscription", "Miscellaneous"];

/// Drives record operations from interactive prompts
pub struct RecordManager<'a, R, W> {
    service: RecordService<'a>,
    prompter: Prompter<R, W>,
    currency_symbol: String,
}

impl<'a, R: BufRead, W: Write> RecordManager<'a, R, W> {
    pub fn new(
        service: RecordService<'a>,
        prompter: Prompter<R, W>,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            service,
            prompter,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// The most recently assigned record id
    pub fn last_id(&self) -> RecordId {
        self.service.last_id()
    }

    /// Prompt for the fields of a new record and save it
    pub fn insert_record(&mut self) -> FinlogResult<()> {
        self.prompter.say(&format!(
            "\nAvailable Categories: {}",
            SUGGESTED_CATEGORIES.join(", ")
        ))?;
        let category = self.prompter.ask("Enter category: ")?;
        let cost = self.prompter.ask_amount("Enter cost: ")?;
        let tag = self.prompter.ask("Enter a tag (e.g., Doctor, Netflix, etc.): ")?;
        let date = self.prompter.ask_date("Enter date (YYYY-MM-DD): ")?;

        self.service.create(CreateRecordInput {
            category,
            cost,
            tag,
            date,
        })?;
        self.prompter.say("Record saved.")
    }

    /// Prompt for an id and delete that record
    ///
    /// Anything that is not an integer aborts the operation after one
    /// message. Any integer reports success whether or not a record matched,
    /// including ones no record can have, such as negatives.
    pub fn delete_record(&mut self) -> FinlogResult<()> {
        let answer = self.prompter.ask("Enter Record ID to remove: ")?;
        let id = match validate::parse_delete_id(&answer) {
            Ok(id) => id,
            Err(_) => return self.prompter.say("Invalid ID input."),
        };

        if let Some(id) = id {
            self.service.delete(id)?;
        }
        self.prompter.say("Deleted successfully.")
    }

    /// Ask for a sort order and print every record
    pub fn view_all(&mut self) -> FinlogResult<()> {
        if self.service.is_empty() {
            return self.prompter.say("No records found.");
        }

        self.prompter.say("\nSort by:\n1. Date\n2. Category\n3. Default")?;
        let choice = self.prompter.ask("Choose: ")?;

        let records = self.service.list(SortOrder::from_choice(&choice));
        self.prompter
            .write(&format_record_listing(&records, &self.currency_symbol))
    }

    /// Run the menu until the user exits
    pub fn run_menu(&mut self) -> FinlogResult<()> {
        loop {
            self.prompter.say("\n--- Finance Log Menu ---")?;
            self.prompter.say("1. Add Record")?;
            self.prompter.say("2. Delete Record")?;
            self.prompter.say("3. View Records")?;
            self.prompter.say("4. Exit")?;

            match self.prompter.ask("Choose an option: ")?.as_str() {
                "1" => self.insert_record()?,
                "2" => self.delete_record()?,
                "3" => self.view_all()?,
                "4" => return Ok(()),
                _ => self.prompter.say("Invalid choice.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::error::FinlogError;
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::new(temp_dir.path().join("records.json"));
        let storage = Storage::open(paths, &Settings::default());
        (temp_dir, storage)
    }

    /// Run the menu against a script and return the result plus the output
    fn run_script(storage: &mut Storage, script: &str) -> (FinlogResult<()>, String) {
        let mut out = Vec::new();
        let result = {
            let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), &mut out);
            let mut manager = RecordManager::new(RecordService::new(storage), prompter, "$");
            manager.run_menu()
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_add_view_delete_session() {
        let (_temp_dir, mut storage) = create_test_storage();
        let script = "1\nhealthcare\n42.50\nDoctor\n2023-06-01\n3\n3\n2\n1\n4\n";

        let (result, out) = run_script(&mut storage, script);
        result.unwrap();

        assert!(out.contains("Available Categories: Healthcare, Entertainment, Subscription, Miscellaneous"));
        assert!(out.contains("Record saved."));
        assert!(out.contains("ID       : 1\nCategory : Healthcare\nCost     : $42.50\n"));
        assert!(out.contains("Deleted successfully."));
        assert!(storage.records.is_empty());
    }

    #[test]
    fn test_add_retries_bad_cost_and_date() {
        let (_temp_dir, mut storage) = create_test_storage();
        let script = "1\nMisc\nten\n10\nNetflix\n2023-6-1\n2023-06-01\n4\n";

        let (result, out) = run_script(&mut storage, script);
        result.unwrap();

        assert!(out.contains("Invalid amount. Try again."));
        assert!(out.contains("Invalid date. Format: YYYY-MM-DD"));
        let records = storage.records.all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cost(), 10.0);
        assert_eq!(records[0].date(), "2023-06-01");
    }

    #[test]
    fn test_delete_invalid_id_aborts_without_retry() {
        let (_temp_dir, mut storage) = create_test_storage();
        let (result, out) = run_script(&mut storage, "2\nabc\n4\n");
        result.unwrap();

        assert!(out.contains("Invalid ID input."));
        assert!(!out.contains("Deleted successfully."));
        assert_eq!(out.matches("Enter Record ID to remove: ").count(), 1);
    }

    #[test]
    fn test_delete_unknown_id_still_reports_success() {
        let (_temp_dir, mut storage) = create_test_storage();
        let (result, out) = run_script(&mut storage, "2\n17\n4\n");
        result.unwrap();
        assert!(out.contains("Deleted successfully."));
    }

    #[test]
    fn test_delete_negative_id_is_a_silent_noop() {
        let (_temp_dir, mut storage) = create_test_storage();
        let script = "1\nMisc\n1\nt\n2024-01-01\n2\n-3\n2\n 1_0 \n4\n";

        let (result, out) = run_script(&mut storage, script);
        result.unwrap();

        assert!(!out.contains("Invalid ID input."));
        assert_eq!(out.matches("Deleted successfully.").count(), 2);
        assert_eq!(storage.records.len(), 1);
    }

    #[test]
    fn test_add_succeeds_when_audit_log_is_unwritable() {
        let (temp_dir, mut storage) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("records.audit.log")).unwrap();

        let (result, out) = run_script(&mut storage, "1\nMisc\n5\nt\n2024-01-01\n4\n");
        result.unwrap();

        assert!(out.contains("Record saved."));
        let reloaded = crate::storage::RecordStore::open(temp_dir.path().join("records.json"));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_view_empty_ledger() {
        let (_temp_dir, mut storage) = create_test_storage();
        let (result, out) = run_script(&mut storage, "3\n4\n");
        result.unwrap();

        assert!(out.contains("No records found."));
        assert!(!out.contains("Sort by:"));
    }

    #[test]
    fn test_view_sorted_by_date() {
        let (_temp_dir, mut storage) = create_test_storage();
        let script = "1\nA\n1\nt\n2023-01-05\n\
                      1\nB\n2\nt\n2023-01-01\n\
                      1\nC\n3\nt\n2022-12-31\n\
                      3\n1\n4\n";

        let (result, out) = run_script(&mut storage, script);
        result.unwrap();

        let first = out.find("Date     : 2022-12-31").unwrap();
        let second = out.find("Date     : 2023-01-01").unwrap();
        let third = out.find("Date     : 2023-01-05").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_invalid_menu_choice_reloops() {
        let (_temp_dir, mut storage) = create_test_storage();
        let (result, out) = run_script(&mut storage, "9\nhello\n4\n");
        result.unwrap();

        assert_eq!(out.matches("Invalid choice.").count(), 2);
        assert_eq!(out.matches("--- Finance Log Menu ---").count(), 3);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_temp_dir, mut storage) = create_test_storage();
        let (result, _) = run_script(&mut storage, "1\nMisc\n");
        assert!(matches!(result, Err(FinlogError::InputClosed(_))));
        assert!(storage.records.is_empty());
    }

    #[test]
    fn test_last_id_after_two_adds() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut out = Vec::new();
        let script = "A\n1\nt\n2024-01-01\nB\n2\nt\n2024-01-02\n1\n";
        let prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), &mut out);
        let mut manager = RecordManager::new(RecordService::new(&mut storage), prompter, "$");

        manager.insert_record().unwrap();
        manager.insert_record().unwrap();
        manager.delete_record().unwrap();

        assert_eq!(manager.last_id(), RecordId::new(2));
    }
}
