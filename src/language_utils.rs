use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating ISO 639-1 (2-letter)
/// language codes and deriving the BCP-47 tags used by speech synthesis.
/// Validate that a language code is a valid ISO 639-1 code
pub fn validate_language_code(code: &str) -> Result<Language> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang);
        }
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let lang = validate_language_code(code)?;
    Ok(lang.to_name().to_string())
}

/// Derive a BCP-47 speech tag for a language code.
///
/// Speech engines want a region-qualified tag. The common pairings are
/// listed here; anything else falls back to the bare 639-1 code.
pub fn speech_tag(code: &str) -> String {
    let normalized_code = code.trim().to_lowercase();
    match normalized_code.as_str() {
        "en" => "en-US".to_string(),
        "vi" => "vi-VN".to_string(),
        "fr" => "fr-FR".to_string(),
        "de" => "de-DE".to_string(),
        "es" => "es-ES".to_string(),
        "ja" => "ja-JP".to_string(),
        "ko" => "ko-KR".to_string(),
        "zh" => "zh-CN".to_string(),
        _ => normalized_code,
    }
}
