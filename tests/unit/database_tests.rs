/*!
 * Tests for the pair, list and database model
 */

use transdb::{DatabaseError, PairList, SearchHint, SentencePair, TranslationDatabase};
use crate::common;

fn pair(first: &str, second: &str) -> SentencePair {
    SentencePair::new(first, second).unwrap()
}

#[test]
fn test_sentencePair_new_withNonEmptyStrings_shouldKeepBothElements() {
    for (first, second) in [("a", "b"), ("hello", "hallo"), ("bye", "tschüss"), ("水", "water")] {
        let pair = SentencePair::new(first, second).unwrap();
        assert_eq!(&pair[0], first);
        assert_eq!(&pair[1], second);
    }
}

#[test]
fn test_sentencePair_new_withAnyEmptyElement_shouldFail() {
    assert!(matches!(SentencePair::new("", "hallo"), Err(DatabaseError::Value(_))));
    assert!(matches!(SentencePair::new("hello", ""), Err(DatabaseError::Value(_))));
}

#[test]
fn test_pairList_append_withDuplicate_shouldLeaveLengthUnchanged() {
    let mut list = PairList::new();
    list.append(pair("hello", "hallo")).unwrap();
    list.append(pair("bye", "tschüss")).unwrap();

    let result = list.append(pair("hello", "hallo"));
    assert!(matches!(result, Err(DatabaseError::Duplicate(_))));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_pairList_getTranslation_withFirstElement_shouldReturnSecond() {
    let list = PairList::from_pairs(vec![
        pair("one", "eins"),
        pair("two", "zwei"),
        pair("three", "drei"),
    ])
    .unwrap();

    for p in list.iter() {
        assert_eq!(list.get_translation(p.first(), SearchHint::First), Some(p.second()));
        assert_eq!(list.get_translation(p.first(), SearchHint::Both), Some(p.second()));
    }
}

#[test]
fn test_database_new_withEqualLanguages_shouldReturnValueError() {
    for lang in ["EN", "", "de-CH", "日本語"] {
        assert!(matches!(TranslationDatabase::new(lang, lang), Err(DatabaseError::Value(_))));
    }
}

#[test]
fn test_database_fromLists_withDuplicatePairs_shouldFail() {
    let result = TranslationDatabase::from_lists(
        "EN",
        "DE",
        vec![("greetings", vec![("hello", "hallo"), ("hello", "hallo")])],
    );
    assert!(matches!(result, Err(DatabaseError::Duplicate(_))));
}

#[test]
fn test_database_fromLists_withDuplicateNames_shouldFail() {
    let result = TranslationDatabase::from_lists(
        "EN",
        "DE",
        vec![
            ("greetings", vec![("hello", "hallo")]),
            ("greetings", vec![("bye", "tschüss")]),
        ],
    );
    assert!(matches!(result, Err(DatabaseError::Duplicate(_))));
}

#[test]
fn test_database_new_shouldRecordCreatorAndScript() {
    let db = TranslationDatabase::new("EN", "DE").unwrap();
    assert_eq!(db.info().creator(), Some("transdb"));
    let script = db.info().field("script").and_then(|v| v.as_str()).unwrap();
    assert!(script.starts_with("transdb v"));
    assert!(db.is_empty());
}

#[test]
fn test_database_getTranslation_withLanguageHint_shouldSearchOneSide() {
    let db = common::greetings_database();
    assert_eq!(db.get_translation("greetings", "hallo", Some("DE")).unwrap(), Some("hello"));
    assert_eq!(db.get_translation("greetings", "hallo", Some("EN")).unwrap(), None);
    assert_eq!(db.get_translation("greetings", "hallo", None).unwrap(), Some("hello"));
}

#[test]
fn test_database_getByIndex_shouldFollowInsertionOrder() {
    let db = common::multi_list_database();
    assert_eq!(db.get_by_index(0).unwrap(), db.get("greetings").unwrap());
    assert_eq!(db.get_by_index(1).unwrap(), db.get("food").unwrap());
    assert!(db.get_by_index(2).unwrap().is_empty());
    assert!(matches!(db.get_by_index(db.len()), Err(DatabaseError::NotFound(_))));
}

#[test]
fn test_database_save_withUnsupportedExtension_shouldReturnFormatError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let db = common::greetings_database();

    let csv = temp_dir.path().join("words.csv");
    assert!(matches!(db.save(&csv, false), Err(DatabaseError::Format(_))));
    assert!(!csv.exists());
}

#[test]
fn test_database_fromFile_withUnsupportedExtension_shouldReturnFormatError() {
    let temp_dir = common::create_temp_dir().unwrap();
    let csv = common::create_test_file(temp_dir.path(), "words.csv", "hello,hallo\n").unwrap();
    assert!(matches!(TranslationDatabase::from_file(&csv), Err(DatabaseError::Format(_))));
}
