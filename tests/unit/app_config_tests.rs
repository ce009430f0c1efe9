/*!
 * Tests for application configuration loading and validation
 */

use tempfile::TempDir;
use transipa::app_config::{Config, LogLevel};

#[test]
fn test_default_config_shouldUseEnViPair() {
    let config = Config::default();
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "vi");
    assert_eq!(config.language_pair(), "en|vi");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_config_shouldPointAtPublicEndpoints() {
    let config = Config::default();
    assert_eq!(config.translation.endpoint, "https://api.mymemory.translated.net/get");
    assert_eq!(config.dictionary.endpoint, "https://api.dictionaryapi.dev/api/v2/entries/en/");
    assert_eq!(config.speech.source_voice, "en-US");
    assert_eq!(config.speech.target_voice, "vi-VN");
}

#[test]
fn test_from_file_withMissingFile_shouldFallBackToDefaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::from_file(temp_dir.path().join("missing.json")).unwrap();
    assert_eq!(config.language_pair(), "en|vi");
}

#[test]
fn test_from_file_withPartialConfig_shouldFillDefaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "target_language": "fr", "log_level": "debug" }"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "fr");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.translation.timeout_secs, 30);
}

#[test]
fn test_from_file_withInvalidLanguage_shouldFail() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "source_language": "nope" }"#).unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_from_file_withMalformedJson_shouldFail() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_save_and_reload_shouldRoundTrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "fr".to_string();
    config.translation.timeout_secs = 5;
    config.save_to_file(&path).unwrap();

    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded.target_language, "fr");
    assert_eq!(reloaded.translation.timeout_secs, 5);
}

#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaultConfig() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();
    assert_eq!(config.language_pair(), "en|vi");
    assert!(path.exists(), "default config file should have been written");

    // The written file must load back as the same defaults
    let reloaded = Config::from_file(&path).unwrap();
    assert_eq!(reloaded.language_pair(), "en|vi");
    assert_eq!(reloaded.translation.endpoint, config.translation.endpoint);
}

#[test]
fn test_load_or_create_withExistingFile_shouldNotOverwriteIt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("conf.json");
    std::fs::write(&path, r#"{ "target_language": "fr" }"#).unwrap();

    let config = Config::load_or_create(&path).unwrap();
    assert_eq!(config.target_language, "fr");
}

#[test]
fn test_validate_withEmptyEndpoint_shouldFail() {
    let mut config = Config::default();
    config.translation.endpoint = String::new();
    assert!(config.validate().is_err());
}
