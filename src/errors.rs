/*!
 * Error types for the transdb library.
 *
 * Every fallible operation on pairs, lists and databases returns a
 * `DatabaseError`. The variants mirror the kinds of failure a caller
 * can react to: wrong value shape, invalid value, duplicates, missing
 * entries, unsupported formats and file-level problems.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building, querying or persisting a translation database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A value has the wrong shape, e.g. a non-string pair element in a loaded file
    #[error("Type error: {0}")]
    Type(String),

    /// A value is well-typed but invalid (empty sentence, equal languages, bad arity)
    #[error("Value error: {0}")]
    Value(String),

    /// A pair or a list name is already present
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// A list name, pair, metadata block or position does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The file extension is not one of the supported formats
    #[error("Unsupported format: {0}")]
    Format(String),

    /// Saving would replace an existing file without permission
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while encoding or decoding JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the spreadsheet reader or writer
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

impl From<anyhow::Error> for DatabaseError {
    fn from(error: anyhow::Error) -> Self {
        // {:#} keeps the context chain on a single line
        Self::File(format!("{:#}", error))
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<umya_spreadsheet::reader::xlsx::XlsxError> for DatabaseError {
    fn from(error: umya_spreadsheet::reader::xlsx::XlsxError) -> Self {
        Self::Spreadsheet(format!("cannot read workbook: {}", error))
    }
}

impl From<umya_spreadsheet::writer::xlsx::XlsxError> for DatabaseError {
    fn from(error: umya_spreadsheet::writer::xlsx::XlsxError) -> Self {
        Self::Spreadsheet(format!("cannot write workbook: {}", error))
    }
}
