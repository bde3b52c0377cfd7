/*!
 * Tests for language utility functions
 */

use transdb::language_utils::{
    describe_language, get_language_name, language_codes_match, primary_subtag,
    validate_language_code, LanguageCodeType,
};

/// Test validation of language codes
#[test]
fn test_validate_language_code_withValidCodes_shouldReturnCorrectType() {
    assert_eq!(validate_language_code("en").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("DE").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code("eng").unwrap(), LanguageCodeType::Part2T);
    assert_eq!(validate_language_code("ger").unwrap(), LanguageCodeType::Part2B);

    // Region suffixes are ignored
    assert_eq!(validate_language_code("de-CH").unwrap(), LanguageCodeType::Part1);
    assert_eq!(validate_language_code(" pt_BR ").unwrap(), LanguageCodeType::Part1);

    // Invalid codes
    assert!(validate_language_code("xyz").is_err());
    assert!(validate_language_code("123").is_err());
    assert!(validate_language_code("").is_err());
}

#[test]
fn test_primary_subtag_shouldLowercaseAndStripRegion() {
    assert_eq!(primary_subtag("en-US"), "en");
    assert_eq!(primary_subtag("DE_ch"), "de");
    assert_eq!(primary_subtag("fra"), "fra");
}

/// Test retrieval of language names from identifiers
#[test]
fn test_get_language_name_withValidCodes_shouldReturnCorrectName() {
    assert_eq!(get_language_name("EN").unwrap(), "English");
    assert_eq!(get_language_name("de-CH").unwrap(), "German");
    assert_eq!(get_language_name("fre").unwrap(), "French");
    assert!(get_language_name("xyz").is_err());
}

#[test]
fn test_language_codes_match_shouldIgnoreFormAndRegion() {
    assert!(language_codes_match("en", "eng"));
    assert!(language_codes_match("de-CH", "ger"));
    assert!(!language_codes_match("en", "fra"));
    assert!(!language_codes_match("xyz", "xyz"));
}

#[test]
fn test_describe_language_shouldFallBackToIdentifier() {
    assert_eq!(describe_language("EN"), "EN (English)");
    assert_eq!(describe_language("Klingon"), "Klingon");
}
