use std::fmt;
use std::ops::Index;
use serde::Serialize;

use crate::errors::DatabaseError;

// @module: Sentence pair value type

/// One sentence and its translation.
///
/// Index 0 holds the sentence in the database's first language and index 1
/// the sentence in the second language. Nothing checks which language a
/// caller actually puts in each slot; the order is a convention.
/// Neither element may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SentencePair {
    // @field: [first, second]
    items: [String; 2],
}

impl SentencePair {
    /// Create a pair, rejecting empty sentences on either side
    pub fn new<A: Into<String>, B: Into<String>>(first: A, second: B) -> Result<Self, DatabaseError> {
        let first = first.into();
        let second = second.into();
        Self::check_sentence(&first)?;
        Self::check_sentence(&second)?;
        Ok(Self { items: [first, second] })
    }

    // @returns: Sentence in the first-language slot
    pub fn first(&self) -> &str {
        &self.items[0]
    }

    // @returns: Sentence in the second-language slot
    pub fn second(&self) -> &str {
        &self.items[1]
    }

    /// Get an element by position, `None` for anything but 0 and 1
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Replace the element at `index` with a new non-empty sentence
    pub fn set<S: Into<String>>(&mut self, index: usize, value: S) -> Result<(), DatabaseError> {
        if index > 1 {
            return Err(DatabaseError::NotFound(format!(
                "sentence pair index {} out of range",
                index
            )));
        }
        let value = value.into();
        Self::check_sentence(&value)?;
        self.items[index] = value;
        Ok(())
    }

    /// Swap the two sentences in place
    pub fn switch(&mut self) {
        self.items.swap(0, 1);
    }

    pub fn as_array(&self) -> &[String; 2] {
        &self.items
    }

    fn check_sentence(value: &str) -> Result<(), DatabaseError> {
        if value.is_empty() {
            return Err(DatabaseError::Value("cannot store empty strings".to_string()));
        }
        Ok(())
    }
}

impl Index<usize> for SentencePair {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.items[index]
    }
}

impl fmt::Display for SentencePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.items[0], self.items[1])
    }
}

impl TryFrom<(String, String)> for SentencePair {
    type Error = DatabaseError;

    fn try_from((first, second): (String, String)) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}

impl TryFrom<(&str, &str)> for SentencePair {
    type Error = DatabaseError;

    fn try_from((first, second): (&str, &str)) -> Result<Self, Self::Error> {
        Self::new(first, second)
    }
}
