/*!
 * Tests for application configuration functionality
 */

use std::time::Duration;

use cascadeanime::app_config::{Config, LogLevel};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "es");
    assert_eq!(config.translation.endpoint, "https://api.mymemory.translated.net");
    assert_eq!(config.translation.contact_email, "cascadeanime@example.com");
    assert_eq!(config.translation.max_chunk_size, 500);
    assert_eq!(config.translation.max_retries, 3);
    assert_eq!(config.translation.retry_backoff_ms, 1000);
    assert_eq!(config.catalog.api_base_url, "https://api.jikan.moe/v4");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_default_config_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.source_language = "x1z".to_string();
    assert!(config.validate().is_err());
    config.source_language = "eng".to_string();
    assert!(config.validate().is_ok());

    config.target_language = "".to_string();
    assert!(config.validate().is_err());
    config.target_language = "es".to_string();

    config.translation.max_chunk_size = 0;
    assert!(config.validate().is_err());
    config.translation.max_chunk_size = 500;

    config.translation.max_retries = 0;
    assert!(config.validate().is_err());
    config.translation.max_retries = 3;

    config.translation.contact_email = "nobody".to_string();
    assert!(config.validate().is_err());
    config.translation.contact_email = "cascadeanime@example.com".to_string();

    config.translation.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());
    config.translation.endpoint = "https://api.mymemory.translated.net".to_string();

    config.catalog.api_base_url = "::".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_translator_options_shouldCarryConfigValues() {
    let mut config = Config::default();
    config.translation.max_chunk_size = 200;
    config.translation.max_retries = 5;
    config.translation.retry_backoff_ms = 10;

    let options = config.translation.translator_options("en", "fr");

    assert_eq!(options.max_chunk_size, 200);
    assert_eq!(options.retry.max_attempts, 5);
    assert_eq!(options.retry.initial_backoff, Duration::from_millis(10));
    assert_eq!(options.target_language, "fr");
}

#[test]
fn test_partial_json_shouldFillDefaults() {
    let json = r#"{ "target_language": "fr", "translation": { "max_chunk_size": 250 } }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.translation.max_chunk_size, 250);
    assert_eq!(config.translation.max_retries, 3);
    assert_eq!(config.catalog.api_base_url, "https://api.jikan.moe/v4");
}

#[test]
fn test_log_level_shouldDeserializeLowercase() {
    let config: Config = serde_json::from_str(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.target_language, "es");

    let reloaded = Config::load_or_create(&path).unwrap();
    assert_eq!(reloaded.translation.contact_email, config.translation.contact_email);
}

#[test]
fn test_load_or_create_withExistingFile_shouldReadIt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "de".to_string();
    config.translation.max_retries = 7;
    config.save(&path).unwrap();

    let loaded = Config::load_or_create(&path).unwrap();
    assert_eq!(loaded.target_language, "de");
    assert_eq!(loaded.translation.max_retries, 7);
}

#[test]
fn test_load_or_create_withInvalidJson_shouldFail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_or_create(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
