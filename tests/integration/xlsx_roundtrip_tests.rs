/*!
 * Save and load tests for the spreadsheet format
 */

use anyhow::Result;
use serde_json::json;
use transdb::format::xlsx;
use transdb::{DatabaseError, TranslationDatabase, INFO_TITLE};
use crate::common;

#[test]
fn test_xlsx_roundTrip_shouldPreserveNonAsciiPairs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("words.xlsx");
    let db = common::greetings_database();

    db.save(&path, false)?;
    let loaded = TranslationDatabase::from_file(&path)?;

    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["greetings"]);
    assert_eq!(loaded.get_translation("greetings", "bye", Some("EN"))?, Some("tschüss"));
    assert_eq!(loaded.info().languages(), ("EN", "DE"));
    assert_eq!(loaded, db);
    Ok(())
}

#[test]
fn test_xlsx_roundTrip_withSeveralLists_shouldKeepOrderAndEmptyLists() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("words.xlsx");
    let db = common::multi_list_database();

    db.save(&path, false)?;
    let loaded = TranslationDatabase::from_file(&path)?;

    assert_eq!(loaded.names().collect::<Vec<_>>(), vec!["greetings", "food", "empty"]);
    assert_eq!(loaded, db);
    Ok(())
}

#[test]
fn test_xlsx_load_withGapInSheet_shouldTruncateAtGap() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("gap.xlsx");

    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    {
        let sheet = book.new_sheet("letters").map_err(anyhow::Error::msg)?;
        sheet.get_cell_mut("A1").set_value_string("a");
        sheet.get_cell_mut("B1").set_value_string("b");
        sheet.get_cell_mut("A2").set_value_string("c");
        sheet.get_cell_mut("B2").set_value_string("d");
        sheet.get_cell_mut("B3").set_value_string("e");
        sheet.get_cell_mut("A4").set_value_string("f");
        sheet.get_cell_mut("B4").set_value_string("g");
    }
    {
        let info = book.new_sheet(INFO_TITLE).map_err(anyhow::Error::msg)?;
        info.get_cell_mut("A1").set_value_string(r#"{"language": ["EN", "DE"]}"#);
    }
    umya_spreadsheet::writer::xlsx::write(&book, &path)?;

    let db = TranslationDatabase::from_file(&path)?;
    let letters = db.get("letters").unwrap();
    assert_eq!(letters.len(), 2);
    assert_eq!(letters.get_translation("c", Default::default()), Some("d"));
    assert_eq!(letters.get_translation("f", Default::default()), None);
    assert!(!db.contains(INFO_TITLE));
    Ok(())
}

#[test]
fn test_xlsx_save_shouldStoreInfoAsJsonInLastSheet() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("words.xlsx");
    common::greetings_database().save(&path, false)?;

    let book = umya_spreadsheet::reader::xlsx::read(&path)?;
    let sheets = book.get_sheet_collection();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0].get_name(), "greetings");
    assert_eq!(sheets[0].get_value("B2"), "tschüss");
    assert_eq!(sheets[1].get_name(), INFO_TITLE);

    let info: serde_json::Value = serde_json::from_str(&sheets[1].get_value("A1"))?;
    assert_eq!(info["language"], json!(["EN", "DE"]));
    Ok(())
}

#[test]
fn test_xlsx_load_withoutInfoSheet_shouldReturnNotFound() -> Result<()> {
    let db = xlsx::from_workbook(&umya_spreadsheet::new_file_empty_worksheet())?;
    assert_eq!(db.info, None);
    assert!(matches!(TranslationDatabase::from_raw(db), Err(DatabaseError::NotFound(_))));
    Ok(())
}

#[test]
fn test_xlsx_convert_toJson_shouldMatchOriginal() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let workbook = temp_dir.path().join("words.xlsx");
    let document = temp_dir.path().join("words.json");
    let db = common::multi_list_database();

    db.save(&workbook, false)?;
    TranslationDatabase::from_file(&workbook)?.save(&document, false)?;
    assert_eq!(TranslationDatabase::from_file(&document)?, db);
    Ok(())
}

#[test]
fn test_xlsx_save_withSheetNameClash_shouldFailWithoutWriting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut db = common::greetings_database();
    db.add_empty("Greetings")?;

    let path = temp_dir.path().join("words.xlsx");
    assert!(matches!(db.save(&path, false), Err(DatabaseError::Duplicate(_))));
    assert!(!path.exists());

    // JSON keys are case-sensitive, so the same database saves there
    let json_path = temp_dir.path().join("words.json");
    db.save(&json_path, false)?;
    assert_eq!(TranslationDatabase::from_file(&json_path)?, db);
    Ok(())
}

#[test]
fn test_xlsx_load_withCorruptFile_shouldReturnSpreadsheetError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.xlsx", "not a workbook")?;

    let error = TranslationDatabase::from_file(&path).unwrap_err();
    assert!(matches!(&error, DatabaseError::Spreadsheet(msg) if msg.starts_with("cannot read workbook")));
    Ok(())
}
