//! Configuration module for finlog
//!
//! This module provides configuration management including:
//! - Ledger file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
