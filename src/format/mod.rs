/*!
 * File format codecs for translation databases.
 *
 * Each codec maps between a `TranslationDatabase` and one external
 * representation and holds no validation logic of its own:
 * - `json`: a single JSON document, one key per list plus `info`
 * - `xlsx`: a workbook, one sheet per list plus an `info` sheet
 *
 * Loading produces a `RawDatabase`, which the database module validates.
 */

use std::fmt;
use std::path::Path;
use serde_json::Value;

use crate::errors::DatabaseError;
use crate::file_utils::FileManager;

pub mod json;
pub mod xlsx;

/// Supported persistence formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Spreadsheet workbook (`.xlsx`)
    Xlsx,
    /// JSON document (`.json`)
    Json,
}

impl Format {
    // @returns: File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }

    /// Pick the format to save `path` with. The extension must match exactly.
    pub fn for_save<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        match FileManager::extension_of(&path).as_deref() {
            Some("xlsx") => Ok(Self::Xlsx),
            Some("json") => Ok(Self::Json),
            _ => Err(Self::unsupported(path.as_ref())),
        }
    }

    /// Pick the format to load `path` with. The extension is matched ignoring case.
    pub fn for_load<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let extension = FileManager::extension_of(&path).map(|ext| ext.to_lowercase());
        match extension.as_deref() {
            Some("xlsx") => Ok(Self::Xlsx),
            Some("json") => Ok(Self::Json),
            _ => Err(Self::unsupported(path.as_ref())),
        }
    }

    fn unsupported(path: &Path) -> DatabaseError {
        DatabaseError::Format(format!(
            "invalid extension for {:?}, expected .xlsx or .json",
            path
        ))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Undecoded content of a database file.
///
/// `info` is the metadata block if the file had one. Each list row is
/// expected to be a two-element array of strings; checking that is left
/// to `TranslationDatabase::from_raw`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDatabase {
    pub info: Option<Value>,
    pub lists: Vec<(String, Vec<Value>)>,
}

impl RawDatabase {
    pub fn list(&self, name: &str) -> Option<&[Value]> {
        self.lists
            .iter()
            .find(|(list_name, _)| list_name == name)
            .map(|(_, rows)| rows.as_slice())
    }
}
