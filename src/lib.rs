//! finlog - Terminal-based personal expense ledger
//!
//! This library provides the core functionality for the finlog application:
//! expense records (category, cost, tag, date) kept in a single local JSON
//! file and managed through an interactive menu or plain subcommands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Ledger path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The record model and its identifier
//! - `validate`: Amount and date validation
//! - `storage`: JSON file storage layer
//! - `audit`: Append-only audit log
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Interactive menu and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finlog::config::{LedgerPaths, Settings};
//! use finlog::services::{CreateRecordInput, RecordService};
//! use finlog::storage::Storage;
//!
//! let paths = LedgerPaths::resolve(None);
//! let settings = Settings::load_or_create(&paths);
//! let mut storage = Storage::open(paths, &settings);
//! let mut service = RecordService::new(&mut storage);
//! service.create(CreateRecordInput {
//!     category: "healthcare".into(),
//!     cost: 42.5,
//!     tag: "Doctor".into(),
//!     date: "2023-06-01".into(),
//! })?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod validate;

pub use error::{FinlogError, FinlogResult};
