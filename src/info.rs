use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::DatabaseError;

// @module: Database metadata block

/// Key of the metadata block in every file format
pub const INFO_TITLE: &str = "info";

/// Key of the language pair inside the metadata block
pub const LANGS: &str = "language";

/// Creator recorded in new databases unless the caller sets another one
pub const DEFAULT_CREATOR: &str = "transdb";

/// Tool tag recorded in new databases
pub const SCRIPT: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Metadata of a translation database.
///
/// Holds the two language identifiers plus free-form fields such as
/// `creator` and `script`. Fields read from a file are kept verbatim and
/// in their original order, even the ones this crate does not know about.
/// The `language` entry of `fields` always mirrors `language`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseInfo {
    language: [String; 2],
    fields: Map<String, Value>,
}

impl Serialize for DatabaseInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl DatabaseInfo {
    /// Create metadata with the default `creator` and `script` fields
    pub fn new<A: ToString, B: ToString>(first_lang: A, second_lang: B) -> Result<Self, DatabaseError> {
        let mut info = Self {
            language: Default::default(),
            fields: Map::new(),
        };
        info.set_languages(first_lang, second_lang)?;
        info.fields.insert("creator".to_string(), Value::String(DEFAULT_CREATOR.to_string()));
        info.fields.insert("script".to_string(), Value::String(SCRIPT.to_string()));
        Ok(info)
    }

    /// Rebuild metadata from a decoded `info` object.
    ///
    /// Language identifiers that are numbers or booleans are turned into
    /// strings. Every other field is kept as-is, and `language` keeps its
    /// position among them.
    pub fn from_value(value: Value) -> Result<Self, DatabaseError> {
        let Value::Object(fields) = value else {
            return Err(DatabaseError::Type(format!("'{}' block must be an object", INFO_TITLE)));
        };

        let language = fields.get(LANGS).ok_or_else(|| {
            DatabaseError::NotFound(format!("'{}' block has no '{}' field", INFO_TITLE, LANGS))
        })?;
        let Value::Array(items) = language else {
            return Err(DatabaseError::Type(format!("'{}' must be an array", LANGS)));
        };
        if items.len() != 2 {
            return Err(DatabaseError::Value(format!(
                "'{}' must hold exactly two identifiers, found {}",
                LANGS,
                items.len()
            )));
        }
        let first = coerce_identifier(&items[0])?;
        let second = coerce_identifier(&items[1])?;

        let mut info = Self {
            language: Default::default(),
            fields,
        };
        info.set_languages(first, second)?;
        Ok(info)
    }

    pub fn first_language(&self) -> &str {
        &self.language[0]
    }

    pub fn second_language(&self) -> &str {
        &self.language[1]
    }

    pub fn languages(&self) -> (&str, &str) {
        (&self.language[0], &self.language[1])
    }

    /// Replace both language identifiers, keeping them distinct.
    ///
    /// The `language` field stays where it is in the field order.
    pub fn set_languages<A: ToString, B: ToString>(&mut self, first_lang: A, second_lang: B) -> Result<(), DatabaseError> {
        let language = check_languages(first_lang, second_lang)?;
        self.fields.insert(
            LANGS.to_string(),
            Value::Array(language.iter().cloned().map(Value::String).collect()),
        );
        self.language = language;
        Ok(())
    }

    pub fn creator(&self) -> Option<&str> {
        self.fields.get("creator").and_then(Value::as_str)
    }

    /// Free-form field by key; `language` is read through the language accessors
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == LANGS {
            return None;
        }
        self.fields.get(key)
    }

    /// Set a free-form field; the language pair has its own setter
    pub fn set_field<V: Into<Value>>(&mut self, key: &str, value: V) -> Result<Option<Value>, DatabaseError> {
        if key == LANGS {
            return Err(DatabaseError::Value(format!(
                "'{}' cannot be set as a free-form field",
                LANGS
            )));
        }
        Ok(self.fields.insert(key.to_string(), value.into()))
    }

    /// Every field in file order, `language` included
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn to_value(&self) -> Result<Value, DatabaseError> {
        Ok(serde_json::to_value(self)?)
    }
}

fn check_languages<A: ToString, B: ToString>(first_lang: A, second_lang: B) -> Result<[String; 2], DatabaseError> {
    let first = first_lang.to_string();
    let second = second_lang.to_string();
    if first == second {
        return Err(DatabaseError::Value(format!(
            "languages have the same value '{}'",
            first
        )));
    }
    Ok([first, second])
}

fn coerce_identifier(value: &Value) -> Result<String, DatabaseError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(DatabaseError::Type(format!(
            "language identifier must be a string, found {}",
            other
        ))),
    }
}
