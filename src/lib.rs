/*!
 * # transdb - bilingual sentence-pair dictionaries
 *
 * A Rust library for storing sentence pairs and their translations in
 * named lists, and for saving them as spreadsheets or JSON documents.
 *
 * ## Features
 *
 * - Sentence pairs that never hold empty sentences
 * - Duplicate-free, ordered pair lists with lookup in either direction
 * - Databases of named lists with language metadata
 * - Persistence to:
 *   - `.xlsx` workbooks (one sheet per list)
 *   - `.json` documents (one key per list)
 * - ISO 639-1 and ISO 639-2 language name lookup
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `pair`: Sentence pair value type
 * - `pair_list`: Ordered, duplicate-free pair lists
 * - `info`: Database metadata block
 * - `database`: Named collection of lists, load and save
 * - `format`: File codecs:
 *   - `format::json`: JSON document codec
 *   - `format::xlsx`: Spreadsheet workbook codec
 * - `app_config`: Configuration of the command-line tool
 * - `file_utils`: File system operations
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod pair;
pub mod pair_list;
pub mod info;
pub mod database;
pub mod format;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use pair::SentencePair;
pub use pair_list::{PairList, SearchHint};
pub use info::{DatabaseInfo, INFO_TITLE};
pub use database::TranslationDatabase;
pub use format::{Format, RawDatabase};
pub use language_utils::{describe_language, get_language_name, language_codes_match};
pub use errors::DatabaseError;
