//! User settings for finlog
//!
//! Settings are optional: a missing settings file means defaults.

use serde::{Deserialize, Serialize};

use log::warn;

use super::paths::LedgerPaths;
use crate::error::FinlogError;
use crate::storage::file_io::{read_json, write_json, LoadOutcome};

/// User settings for finlog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown before costs
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether creates and deletes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// An unreadable settings file is not fatal: it is reported through
    /// `warn!` and the defaults are used. Nothing is written here.
    pub fn load_or_create(paths: &LedgerPaths) -> Self {
        let settings_path = paths.settings_file();

        match read_json::<Settings, _>(&settings_path) {
            LoadOutcome::Loaded(settings) => settings,
            LoadOutcome::Missing => Settings::default(),
            LoadOutcome::Corrupt(reason) => {
                warn!("Ignoring settings file, using defaults: {}", reason);
                Settings::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), FinlogError> {
        write_json(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_paths(temp_dir: &TempDir) -> LedgerPaths {
        LedgerPaths::new(temp_dir.path().join("records.json"))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_or_create(&test_paths(&temp_dir));
        assert_eq!(settings, Settings::default());
        assert!(!temp_dir.path().join("finlog.json").exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);

        let settings = Settings {
            currency_symbol: "€".to_string(),
            audit_enabled: false,
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths);
        assert_eq!(loaded.currency_symbol, "$");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);
        std::fs::write(paths.settings_file(), "nope").unwrap();

        assert_eq!(Settings::load_or_create(&paths), Settings::default());
        assert_eq!(std::fs::read_to_string(paths.settings_file()).unwrap(), "nope");
    }

    #[test]
    fn test_wrong_types_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"audit_enabled": "yes"}"#).unwrap();

        assert_eq!(Settings::load_or_create(&paths), Settings::default());
    }

    #[test]
    fn test_save_failure_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = test_paths(&temp_dir);
        std::fs::create_dir(paths.settings_file()).unwrap();

        let err = Settings::default().save(&paths).unwrap_err();
        assert!(matches!(err, FinlogError::Storage(_)));
    }
}
