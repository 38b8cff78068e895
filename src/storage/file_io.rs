//! File I/O helpers for the JSON ledger
//!
//! Reads are lenient: a missing or unparseable file is reported as an
//! outcome, never as an error. Writes overwrite the target in place.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FinlogError;

/// What happened when reading a JSON file
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The file existed and parsed
    Loaded(T),
    /// The file does not exist
    Missing,
    /// The file exists but could not be opened or parsed
    Corrupt(String),
}

impl<T> LoadOutcome<T> {
    /// Map the loaded value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        match self {
            Self::Loaded(value) => LoadOutcome::Loaded(f(value)),
            Self::Missing => LoadOutcome::Missing,
            Self::Corrupt(reason) => LoadOutcome::Corrupt(reason),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Read JSON from a file, classifying missing and corrupt files
pub fn read_json<T, P>(path: P) -> LoadOutcome<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return LoadOutcome::Missing;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return LoadOutcome::Corrupt(format!("Failed to open {}: {}", path.display(), e)),
    };

    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(value) => LoadOutcome::Loaded(value),
        Err(e) => LoadOutcome::Corrupt(format!("Failed to parse {}: {}", path.display(), e)),
    }
}

/// Write pretty-printed JSON to a file, replacing its contents
///
/// The file is truncated and rewritten directly. A crash mid-write can leave
/// a truncated file behind.
pub fn write_json<T, P>(path: P, data: &T) -> Result<(), FinlogError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            FinlogError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path)
        .map_err(|e| FinlogError::Storage(format!("Failed to open {} for writing: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| FinlogError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinlogError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(())
}
