/*!
 * Ordered, duplicate-free list of sentence pairs.
 *
 * A `PairList` keeps its pairs in insertion order and refuses to hold two
 * structurally equal pairs. A hash set mirrors the vector so membership
 * checks do not scan the whole list.
 */

use std::collections::HashSet;
use std::fmt;
use std::slice;
use serde::Serialize;

use crate::errors::DatabaseError;
use crate::pair::SentencePair;

/// Where `PairList::get_translation` looks for the sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchHint {
    /// Search first elements, then second elements
    #[default]
    Both,
    /// Search first elements only and return the second element
    First,
    /// Search second elements only and return the first element
    Second,
}

/// A named list's content: sentence pairs in order, without duplicates
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PairList {
    pairs: Vec<SentencePair>,
    #[serde(skip)]
    seen: HashSet<SentencePair>,
}

impl PairList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from pairs, failing on the first duplicate
    pub fn from_pairs<I: IntoIterator<Item = SentencePair>>(pairs: I) -> Result<Self, DatabaseError> {
        let mut list = Self::new();
        for pair in pairs {
            list.append(pair)?;
        }
        Ok(list)
    }

    /// Add a pair at the end of the list
    pub fn append(&mut self, pair: SentencePair) -> Result<(), DatabaseError> {
        self.check_unique(&pair)?;
        self.seen.insert(pair.clone());
        self.pairs.push(pair);
        Ok(())
    }

    /// Insert a pair at `index`, shifting later pairs towards the end
    pub fn insert(&mut self, index: usize, pair: SentencePair) -> Result<(), DatabaseError> {
        if index > self.pairs.len() {
            return Err(DatabaseError::NotFound(format!(
                "insert position {} out of range for list of length {}",
                index,
                self.pairs.len()
            )));
        }
        self.check_unique(&pair)?;
        self.seen.insert(pair.clone());
        self.pairs.insert(index, pair);
        Ok(())
    }

    /// Append every pair of `other` in order.
    ///
    /// Stops at the first duplicate. Pairs appended before it stay in the list.
    pub fn extend<I: IntoIterator<Item = SentencePair>>(&mut self, other: I) -> Result<(), DatabaseError> {
        for pair in other {
            self.append(pair)?;
        }
        Ok(())
    }

    /// Replace the pair at `index`, returning the old one
    pub fn replace(&mut self, index: usize, pair: SentencePair) -> Result<SentencePair, DatabaseError> {
        let current = self.pairs.get(index).ok_or_else(|| self.out_of_range(index))?;
        if *current == pair {
            return Ok(pair);
        }
        self.check_unique(&pair)?;
        self.seen.remove(current);
        self.seen.insert(pair.clone());
        Ok(std::mem::replace(&mut self.pairs[index], pair))
    }

    /// Remove the first pair equal to `pair`
    pub fn remove(&mut self, pair: &SentencePair) -> Result<(), DatabaseError> {
        let index = self
            .position(pair)
            .ok_or_else(|| DatabaseError::NotFound(format!("sentence pair {} not in list", pair)))?;
        self.pairs.remove(index);
        self.seen.remove(pair);
        Ok(())
    }

    /// Remove and return the pair at `index`, or the last pair when `index` is `None`
    pub fn pop(&mut self, index: Option<usize>) -> Result<SentencePair, DatabaseError> {
        let index = match index {
            Some(i) => i,
            None => self
                .pairs
                .len()
                .checked_sub(1)
                .ok_or_else(|| DatabaseError::NotFound("pop from empty list".to_string()))?,
        };
        if index >= self.pairs.len() {
            return Err(self.out_of_range(index));
        }
        let pair = self.pairs.remove(index);
        self.seen.remove(&pair);
        Ok(pair)
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
        self.seen.clear();
    }

    /// Look up the counterpart of `sentence`.
    ///
    /// The search is linear and the first match in list order wins. With
    /// `SearchHint::Both` every first element is tried before any second element.
    pub fn get_translation(&self, sentence: &str, hint: SearchHint) -> Option<&str> {
        if matches!(hint, SearchHint::Both | SearchHint::First) {
            if let Some(pair) = self.pairs.iter().find(|p| p.first() == sentence) {
                return Some(pair.second());
            }
        }
        if matches!(hint, SearchHint::Both | SearchHint::Second) {
            if let Some(pair) = self.pairs.iter().find(|p| p.second() == sentence) {
                return Some(pair.first());
            }
        }
        None
    }

    pub fn get(&self, index: usize) -> Option<&SentencePair> {
        self.pairs.get(index)
    }

    pub fn contains(&self, pair: &SentencePair) -> bool {
        self.seen.contains(pair)
    }

    pub fn position(&self, pair: &SentencePair) -> Option<usize> {
        if !self.contains(pair) {
            return None;
        }
        self.pairs.iter().position(|p| p == pair)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, SentencePair> {
        self.pairs.iter()
    }

    fn check_unique(&self, pair: &SentencePair) -> Result<(), DatabaseError> {
        if self.seen.contains(pair) {
            return Err(DatabaseError::Duplicate(format!(
                "sentence pair {} already exists",
                pair
            )));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> DatabaseError {
        DatabaseError::NotFound(format!(
            "list index {} out of range for list of length {}",
            index,
            self.pairs.len()
        ))
    }
}

impl PartialEq for PairList {
    fn eq(&self, other: &Self) -> bool {
        self.pairs == other.pairs
    }
}

impl Eq for PairList {}

impl<'a> IntoIterator for &'a PairList {
    type Item = &'a SentencePair;
    type IntoIter = slice::Iter<'a, SentencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

impl IntoIterator for PairList {
    type Item = SentencePair;
    type IntoIter = std::vec::IntoIter<SentencePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl fmt::Display for PairList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            write!(f, "    {}", pair)?;
            if i + 1 < self.pairs.len() {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
