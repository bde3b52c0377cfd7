/*!
 * Translation database: named sentence-pair lists plus metadata.
 *
 * A `TranslationDatabase` keeps its lists in insertion order, which is
 * also the order they are saved in. List names are unique, case-sensitive
 * and never equal to the reserved metadata key. The first and second
 * language identifiers tell callers which side of each pair holds which
 * language; they are not checked against the stored sentences.
 */

use std::path::Path;
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use crate::errors::DatabaseError;
use crate::file_utils::FileManager;
use crate::format::{self, Format, RawDatabase};
use crate::info::{DatabaseInfo, INFO_TITLE};
use crate::pair::SentencePair;
use crate::pair_list::{PairList, SearchHint};

/// Named collection of `PairList`s with language metadata
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDatabase {
    info: DatabaseInfo,
    lists: IndexMap<String, PairList>,
}

impl TranslationDatabase {
    /// Create an empty database.
    ///
    /// Both identifiers are converted to strings and must differ.
    pub fn new<A: ToString, B: ToString>(first_lang: A, second_lang: B) -> Result<Self, DatabaseError> {
        Ok(Self::with_info(DatabaseInfo::new(first_lang, second_lang)?))
    }

    /// Create a database around existing metadata
    pub fn with_info(info: DatabaseInfo) -> Self {
        Self {
            info,
            lists: IndexMap::new(),
        }
    }

    /// Create a database and fill it with named lists of raw pairs
    pub fn from_lists<A, B, I, N, R, P>(first_lang: A, second_lang: B, lists: I) -> Result<Self, DatabaseError>
    where
        A: ToString,
        B: ToString,
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: IntoIterator<Item = P>,
        P: TryInto<SentencePair, Error = DatabaseError>,
    {
        let mut db = Self::new(first_lang, second_lang)?;
        for (name, pairs) in lists {
            let pairs = pairs
                .into_iter()
                .map(<P as TryInto<SentencePair>>::try_into)
                .collect::<Result<Vec<SentencePair>, _>>()?;
            db.add(name, PairList::from_pairs(pairs)?)?;
        }
        Ok(db)
    }

    /// Rebuild a database from decoded file content.
    ///
    /// The metadata block is kept verbatim apart from the language pair,
    /// which is re-checked. Every list row must be a two-element array of
    /// non-empty strings.
    pub fn from_raw(raw: RawDatabase) -> Result<Self, DatabaseError> {
        let info = raw.info.ok_or_else(|| {
            DatabaseError::NotFound(format!("metadata block '{}' is missing", INFO_TITLE))
        })?;
        let mut db = Self::with_info(DatabaseInfo::from_value(info)?);

        for (name, rows) in raw.lists {
            let mut list = PairList::new();
            for row in rows {
                list.append(pair_from_raw(&name, row)?)?;
            }
            db.add(name, list)?;
        }
        Ok(db)
    }

    /// Load a database from a `.xlsx` or `.json` file (extension case ignored)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let raw = match Format::for_load(path)? {
            Format::Xlsx => format::xlsx::load(path)?,
            Format::Json => format::json::load(path)?,
        };
        let db = Self::from_raw(raw)?;
        debug!(
            "Loaded database {:?} ({} -> {}, {} list(s))",
            path,
            db.info.first_language(),
            db.info.second_language(),
            db.len()
        );
        Ok(db)
    }

    /// Save the database, choosing the format from the path's extension.
    ///
    /// Only the exact extensions `xlsx` and `json` are accepted. An existing
    /// file is replaced only when `overwrite` is true.
    pub fn save<P: AsRef<Path>>(&self, path: P, overwrite: bool) -> Result<(), DatabaseError> {
        let path = path.as_ref();
        let target = Format::for_save(path)?;
        if !overwrite && FileManager::file_exists(path) {
            return Err(DatabaseError::AlreadyExists(path.to_path_buf()));
        }
        match target {
            Format::Xlsx => format::xlsx::save(self, path),
            Format::Json => format::json::save(self, path),
        }
    }

    pub fn info(&self) -> &DatabaseInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut DatabaseInfo {
        &mut self.info
    }

    /// Replace both language identifiers
    pub fn change_lang_attrs<A: ToString, B: ToString>(&mut self, first_lang: A, second_lang: B) -> Result<(), DatabaseError> {
        self.info.set_languages(first_lang, second_lang)
    }

    /// Store `list` under `name`, replacing any list already there.
    ///
    /// Returns the replaced list. Use `add` to refuse replacing.
    pub fn set_list<N: Into<String>>(&mut self, name: N, list: PairList) -> Result<Option<PairList>, DatabaseError> {
        let name = name.into();
        check_list_name(&name)?;
        Ok(self.lists.insert(name, list))
    }

    /// Register a new list, failing if the name is taken
    pub fn add<N: Into<String>>(&mut self, name: N, list: PairList) -> Result<(), DatabaseError> {
        let name = name.into();
        if self.lists.contains_key(&name) {
            return Err(DatabaseError::Duplicate(format!("list '{}' already exists", name)));
        }
        self.set_list(name, list)?;
        Ok(())
    }

    /// Register a new empty list, failing if the name is taken
    pub fn add_empty<N: Into<String>>(&mut self, name: N) -> Result<(), DatabaseError> {
        self.add(name, PairList::new())
    }

    /// Remove a list, keeping the order of the others
    pub fn remove_list(&mut self, name: &str) -> Result<PairList, DatabaseError> {
        self.lists
            .shift_remove(name)
            .ok_or_else(|| missing_list(name))
    }

    pub fn get(&self, name: &str) -> Option<&PairList> {
        self.lists.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PairList> {
        self.lists.get_mut(name)
    }

    /// Get the list at `index` in insertion order
    pub fn get_by_index(&self, index: usize) -> Result<&PairList, DatabaseError> {
        self.lists
            .get_index(index)
            .map(|(_, list)| list)
            .ok_or_else(|| {
                DatabaseError::NotFound(format!(
                    "database index {} out of range for {} list(s)",
                    index,
                    self.lists.len()
                ))
            })
    }

    /// Translate `sentence` using the list `key`.
    ///
    /// When `lang` names the first language only first elements are searched,
    /// when it names the second language only second elements; otherwise both.
    pub fn get_translation(&self, key: &str, sentence: &str, lang: Option<&str>) -> Result<Option<&str>, DatabaseError> {
        let list = self.lists.get(key).ok_or_else(|| missing_list(key))?;
        let hint = match lang {
            Some(lang) if lang == self.info.first_language() => SearchHint::First,
            Some(lang) if lang == self.info.second_language() => SearchHint::Second,
            _ => SearchHint::Both,
        };
        Ok(list.get_translation(sentence, hint))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PairList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<'a> IntoIterator for &'a TranslationDatabase {
    type Item = (&'a String, &'a PairList);
    type IntoIter = indexmap::map::Iter<'a, String, PairList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}

fn check_list_name(name: &str) -> Result<(), DatabaseError> {
    if name.is_empty() {
        return Err(DatabaseError::Value("list name cannot be empty".to_string()));
    }
    if name == INFO_TITLE {
        return Err(DatabaseError::Value(format!(
            "'{}' is reserved for the metadata block",
            INFO_TITLE
        )));
    }
    Ok(())
}

fn missing_list(name: &str) -> DatabaseError {
    DatabaseError::NotFound(format!("list '{}' does not exist", name))
}

// @validates: Raw row is [string, string] with non-empty sentences
fn pair_from_raw(list_name: &str, row: Value) -> Result<SentencePair, DatabaseError> {
    let Value::Array(items) = row else {
        return Err(DatabaseError::Type(format!(
            "list '{}': sentence pair must be an array, found {}",
            list_name, row
        )));
    };
    let [first, second]: [Value; 2] = items.try_into().map_err(|items: Vec<Value>| {
        DatabaseError::Value(format!(
            "list '{}': sentence pair must have 2 elements, found {}",
            list_name,
            items.len()
        ))
    })?;
    let first = sentence_from_raw(list_name, first)?;
    let second = sentence_from_raw(list_name, second)?;
    SentencePair::new(first, second)
}

fn sentence_from_raw(list_name: &str, item: Value) -> Result<String, DatabaseError> {
    match item {
        Value::String(s) => Ok(s),
        other => Err(DatabaseError::Type(format!(
            "list '{}': string element expected, found {}",
            list_name, other
        ))),
    }
}
