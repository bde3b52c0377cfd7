use std::collections::HashSet;
use std::path::Path;
use log::{debug, warn};
use serde_json::Value;
use umya_spreadsheet::{Spreadsheet, Worksheet};

use super::RawDatabase;
use crate::database::TranslationDatabase;
use crate::errors::DatabaseError;
use crate::file_utils::FileManager;
use crate::info::INFO_TITLE;

// @module: Spreadsheet workbook codec

// @const: Cell font and column width for list sheets
const FONT_NAME: &str = "Arial";
const FONT_SIZE: f64 = 12.0;
const COLUMN_WIDTH: f64 = 60.0;

// @const: Limits spreadsheet applications put on sheet names
const MAX_SHEET_NAME_LEN: usize = 31;
const FORBIDDEN_SHEET_CHARS: &[char] = &['/', '\\', '?', '*', '[', ']', ':'];

/// Build a workbook with one sheet per list and a trailing `info` sheet.
///
/// Column A holds first elements and column B second elements, one pair
/// per row starting at row 1. Cell A1 of the `info` sheet holds the
/// metadata block as compact JSON.
pub fn to_workbook(db: &TranslationDatabase) -> Result<Spreadsheet, DatabaseError> {
    check_sheet_names(db.names())?;
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    for (name, list) in db.iter() {
        let sheet = new_sheet(&mut book, name)?;
        decorate_sheet(sheet);
        for (row, pair) in (1u32..).zip(list.iter()) {
            write_cell(sheet, 1, row, pair.first());
            write_cell(sheet, 2, row, pair.second());
        }
    }

    let info = serde_json::to_string(db.info())?;
    let sheet = new_sheet(&mut book, INFO_TITLE)?;
    sheet.get_cell_mut("A1").set_value_string(info);

    Ok(book)
}

/// Read the `info` block and every list sheet of a workbook.
///
/// A list ends at the first row where column A or column B is empty.
/// Rows below such a gap are dropped.
pub fn from_workbook(book: &Spreadsheet) -> Result<RawDatabase, DatabaseError> {
    let mut raw = RawDatabase::default();

    for sheet in book.get_sheet_collection() {
        if sheet.get_name() == INFO_TITLE {
            let text = cell_text(sheet, 1, 1).ok_or_else(|| {
                DatabaseError::NotFound(format!("'{}' sheet has no content in A1", INFO_TITLE))
            })?;
            raw.info = Some(serde_json::from_str(&text)?);
            continue;
        }
        raw.lists.push((sheet.get_name().to_string(), read_rows(sheet)));
    }

    Ok(raw)
}

pub fn save<P: AsRef<Path>>(db: &TranslationDatabase, path: P) -> Result<(), DatabaseError> {
    let path = path.as_ref();
    let book = to_workbook(db)?;
    if let Some(parent) = path.parent() {
        FileManager::ensure_dir(parent)?;
    }
    umya_spreadsheet::writer::xlsx::write(&book, path)?;
    debug!("Wrote {} list sheet(s) to {:?}", db.len(), path);
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<RawDatabase, DatabaseError> {
    let path = path.as_ref();
    let book = umya_spreadsheet::reader::xlsx::read(path)?;
    let raw = from_workbook(&book)?;
    debug!("Read {} list sheet(s) from {:?}", raw.lists.len(), path);
    Ok(raw)
}

fn new_sheet<'a>(book: &'a mut Spreadsheet, name: &str) -> Result<&'a mut Worksheet, DatabaseError> {
    book.new_sheet(name)
        .map_err(|e| DatabaseError::Spreadsheet(format!("cannot create sheet '{}': {}", name, e)))
}

/// Reject list names a workbook cannot hold as sheet titles.
///
/// Titles are at most 31 characters, must not contain `/ \ ? * [ ] :`,
/// must not start or end with an apostrophe and are compared without case,
/// so `Greetings` and `greetings` cannot both be sheets.
fn check_sheet_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> Result<(), DatabaseError> {
    let mut seen = HashSet::from([INFO_TITLE.to_lowercase()]);
    for name in names {
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(DatabaseError::Value(format!(
                "list '{}' is longer than {} characters and cannot be a sheet name",
                name, MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
            return Err(DatabaseError::Value(format!(
                "list '{}' contains '{}', which is not allowed in sheet names",
                name, c
            )));
        }
        if name.starts_with('\'') || name.ends_with('\'') {
            return Err(DatabaseError::Value(format!(
                "list '{}' cannot start or end with an apostrophe in a sheet name",
                name
            )));
        }
        if !seen.insert(name.to_lowercase()) {
            return Err(DatabaseError::Duplicate(format!(
                "list '{}' clashes with another sheet name that differs only in case",
                name
            )));
        }
    }
    Ok(())
}

fn decorate_sheet(sheet: &mut Worksheet) {
    sheet.get_column_dimension_mut("A").set_width(COLUMN_WIDTH);
    sheet.get_column_dimension_mut("B").set_width(COLUMN_WIDTH);
}

fn write_cell(sheet: &mut Worksheet, col: u32, row: u32, text: &str) {
    sheet.get_cell_mut((col, row)).set_value_string(text);
    sheet
        .get_style_mut((col, row))
        .get_font_mut()
        .set_name(FONT_NAME)
        .set_size(FONT_SIZE);
}

fn read_rows(sheet: &Worksheet) -> Vec<Value> {
    let mut rows = Vec::new();
    let mut row = 1u32;
    while let (Some(first), Some(second)) = (cell_text(sheet, 1, row), cell_text(sheet, 2, row)) {
        rows.push(Value::Array(vec![Value::String(first), Value::String(second)]));
        row += 1;
    }

    let highest = sheet.get_highest_row();
    if highest >= row {
        warn!(
            "Sheet '{}': row {} is incomplete, ignoring rows {} to {}",
            sheet.get_name(),
            row,
            row,
            highest
        );
    }
    rows
}

fn cell_text(sheet: &Worksheet, col: u32, row: u32) -> Option<String> {
    let value = sheet.get_cell((col, row))?.get_value();
    if value.is_empty() {
        None
    } else {
        Some(value.into_owned())
    }
}
