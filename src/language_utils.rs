use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for database language identifiers
///
/// Databases store their two language identifiers as free text
/// ("EN", "de-CH", "fra"...). These helpers recognise the ISO 639 part
/// of such identifiers so they can be shown with a readable name.
/// Language code type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCodeType {
    /// ISO 639-1 (2-letter) code
    Part1,
    /// ISO 639-2/T (3-letter) code
    Part2T,
    /// ISO 639-2/B (3-letter) code
    Part2B,
}

// @const: ISO 639-2/B codes that differ from their 639-2/T form
const BIBLIOGRAPHIC_CODES: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Strip a region or script suffix: "de-CH" and "pt_BR" become "de" and "pt"
pub fn primary_subtag(identifier: &str) -> String {
    identifier
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Validate the ISO 639 part of a language identifier
pub fn validate_language_code(identifier: &str) -> Result<LanguageCodeType> {
    let code = primary_subtag(identifier);

    match code.len() {
        2 if Language::from_639_1(&code).is_some() => Ok(LanguageCodeType::Part1),
        3 if Language::from_639_3(&code).is_some() => Ok(LanguageCodeType::Part2T),
        3 if BIBLIOGRAPHIC_CODES.iter().any(|(b, _)| *b == code) => Ok(LanguageCodeType::Part2B),
        _ => Err(anyhow!("Invalid language code: {}", identifier)),
    }
}

/// Resolve a language identifier to an isolang language
fn resolve(identifier: &str) -> Result<Language> {
    let code = primary_subtag(identifier);
    let language = match validate_language_code(identifier)? {
        LanguageCodeType::Part1 => Language::from_639_1(&code),
        LanguageCodeType::Part2T => Language::from_639_3(&code),
        LanguageCodeType::Part2B => BIBLIOGRAPHIC_CODES
            .iter()
            .find(|(b, _)| *b == code)
            .and_then(|(_, t)| Language::from_639_3(t)),
    };
    language.ok_or_else(|| anyhow!("Failed to get language from code: {}", identifier))
}

/// Get the English language name for an identifier
pub fn get_language_name(identifier: &str) -> Result<String> {
    Ok(resolve(identifier)?.to_name().to_string())
}

/// Check if two identifiers name the same language, ignoring regions
pub fn language_codes_match(first: &str, second: &str) -> bool {
    match (resolve(first), resolve(second)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Format an identifier for display, e.g. "EN (English)", or the bare identifier if unknown
pub fn describe_language(identifier: &str) -> String {
    match get_language_name(identifier) {
        Ok(name) => format!("{} ({})", identifier, name),
        Err(_) => identifier.to_string(),
    }
}
