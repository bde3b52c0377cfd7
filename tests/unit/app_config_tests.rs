/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use log::LevelFilter;
use transdb::app_config::{Config, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.creator, "transdb");
    assert_eq!(config.default_languages.first, "EN");
    assert_eq!(config.default_languages.second, "DE");
    assert!(!config.overwrite);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.creator = "  ".to_string();
    assert!(config.validate().is_err());
    config.creator = "someone".to_string();

    config.default_languages.second = "EN".to_string();
    assert!(config.validate().is_err());
    config.default_languages.second = "FR".to_string();

    assert!(config.validate().is_ok());
}

#[test]
fn test_config_loadOrDefault_withMissingFile_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path().join("missing.json"))?;
    assert_eq!(config, Config::default());
    Ok(())
}

#[test]
fn test_config_loadOrDefault_withPartialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "transdb.json",
        r#"{"creator": "Translator", "log_level": "debug"}"#,
    )?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.creator, "Translator");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), LevelFilter::Debug);
    assert_eq!(config.default_languages.first, "EN");
    Ok(())
}

#[test]
fn test_config_loadOrDefault_withInvalidFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let broken = common::create_test_file(temp_dir.path(), "broken.json", "{ not json")?;
    assert!(Config::load_or_default(&broken).is_err());

    let same_languages = common::create_test_file(
        temp_dir.path(),
        "same.json",
        r#"{"default_languages": {"first": "EN", "second": "EN"}}"#,
    )?;
    assert!(Config::load_or_default(&same_languages).is_err());
    Ok(())
}

#[test]
fn test_config_loadOrDefault_withDirectoryPath_shouldReturnDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config = Config::load_or_default(temp_dir.path())?;
    assert_eq!(config, Config::default());
    Ok(())
}
