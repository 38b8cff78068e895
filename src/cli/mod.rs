//! CLI command handlers
//!
//! This module contains the interactive menu and the argument-driven
//! commands, bridging clap and the prompt helper with the service layer.

pub mod history;
pub mod interactive;
pub mod prompt;
pub mod record;

pub use history::handle_history_command;
pub use interactive::RecordManager;
pub use prompt::Prompter;
pub use record::{handle_record_command, RecordCommands, SortArg};
