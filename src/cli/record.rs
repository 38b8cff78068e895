//! Non-interactive record commands
//!
//! The same operations as the menu, driven by arguments. Invalid input is
//! reported as an error instead of re-prompting.

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::format_record_listing;
use crate::error::FinlogResult;
use crate::models::SortOrder;
use crate::services::{CreateRecordInput, RecordService};
use crate::storage::Storage;
use crate::validate;

/// Sort order accepted by `list --sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Date,
    Category,
    Default,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Date => SortOrder::Date,
            SortArg::Category => SortOrder::Category,
            SortArg::Default => SortOrder::Insertion,
        }
    }
}

/// Record subcommands
#[derive(Subcommand)]
pub enum RecordCommands {
    /// Add a record
    Add {
        /// Category (capitalized on save)
        category: String,
        /// Cost, any sign
        #[arg(allow_negative_numbers = true)]
        cost: String,
        /// Free-text tag (e.g. Doctor, Netflix)
        tag: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Delete a record by ID
    Delete {
        /// Record ID
        #[arg(allow_negative_numbers = true)]
        id: String,
    },
    /// List records
    #[command(alias = "ls")]
    List {
        /// Sort order
        #[arg(short, long, value_enum, default_value = "default")]
        sort: SortArg,
    },
}

/// Handle a record command
pub fn handle_record_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: RecordCommands,
) -> FinlogResult<()> {
    let mut service = RecordService::new(storage);

    match cmd {
        RecordCommands::Add {
            category,
            cost,
            tag,
            date,
        } => {
            let cost = validate::parse_amount(&cost)?;
            let record = service.create(CreateRecordInput {
                category,
                cost,
                tag,
                date,
            })?;
            println!("Record saved (ID {}).", record.record_id());
        }

        RecordCommands::Delete { id } => {
            if let Some(id) = validate::parse_delete_id(&id)? {
                service.delete(id)?;
            }
            println!("Deleted successfully.");
        }

        RecordCommands::List { sort } => {
            let records = service.list(sort.into());
            print!("{}", format_record_listing(&records, &settings.currency_symbol));
        }
    }

    Ok(())
}
