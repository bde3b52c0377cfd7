use std::path::Path;
use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use super::RawDatabase;
use crate::database::TranslationDatabase;
use crate::errors::DatabaseError;
use crate::file_utils::FileManager;
use crate::info::INFO_TITLE;

// @module: JSON document codec

/// Render the database as a JSON document.
///
/// Lists come first in registration order, then the `info` block. The
/// output is indented with four spaces and keeps non-ASCII text unescaped.
pub fn encode(db: &TranslationDatabase) -> Result<String, DatabaseError> {
    let mut document = Map::new();
    for (name, list) in db.iter() {
        document.insert(name.to_string(), serde_json::to_value(list)?);
    }
    document.insert(INFO_TITLE.to_string(), db.info().to_value()?);

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    Value::Object(document).serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| DatabaseError::Value(e.to_string()))
}

/// Split a JSON document into the `info` block and raw list payloads
pub fn decode(text: &str) -> Result<RawDatabase, DatabaseError> {
    let Value::Object(document) = serde_json::from_str::<Value>(text)? else {
        return Err(DatabaseError::Type("top-level JSON value must be an object".to_string()));
    };

    let mut raw = RawDatabase::default();
    for (key, value) in document {
        if key == INFO_TITLE {
            raw.info = Some(value);
            continue;
        }
        match value {
            Value::Array(rows) => raw.lists.push((key, rows)),
            other => {
                return Err(DatabaseError::Type(format!(
                    "list '{}' must be an array, found {}",
                    key, other
                )));
            }
        }
    }
    Ok(raw)
}

pub fn save<P: AsRef<Path>>(db: &TranslationDatabase, path: P) -> Result<(), DatabaseError> {
    let text = encode(db)?;
    FileManager::write_to_file(&path, &text)?;
    debug!("Wrote {} list(s) to {:?}", db.len(), path.as_ref());
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<RawDatabase, DatabaseError> {
    let text = FileManager::read_to_string(&path)?;
    let raw = decode(&text)?;
    debug!("Read {} list(s) from {:?}", raw.lists.len(), path.as_ref());
    Ok(raw)
}
