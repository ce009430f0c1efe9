use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::language_utils;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO 639-1)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO 639-1)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation API config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Dictionary API config
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Speech synthesis config
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Base URL of the translation API
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Dictionary endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DictionaryConfig {
    /// Base URL of the dictionary API, the looked-up word is appended
    #[serde(default = "default_dictionary_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Speech synthesis configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SpeechConfig {
    /// BCP-47 tag used when speaking the source text
    #[serde(default = "default_source_voice")]
    pub source_voice: String,

    /// BCP-47 tag used when speaking the translated text
    #[serde(default = "default_target_voice")]
    pub target_voice: String,

    /// Speech rate multiplier
    #[serde(default = "default_speech_rate")]
    pub rate: f32,
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "vi".to_string()
}

fn default_translation_endpoint() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_dictionary_endpoint() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_source_voice() -> String {
    language_utils::speech_tag(&default_source_language())
}

fn default_target_voice() -> String {
    language_utils::speech_tag(&default_target_language())
}

fn default_speech_rate() -> f32 {
    1.0
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_dictionary_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            source_voice: default_source_voice(),
            target_voice: default_target_voice(),
            rate: default_speech_rate(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            dictionary: DictionaryConfig::default(),
            speech: SpeechConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults
    /// if the file does not exist
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, writing a default one first
    /// if the file does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Self::default();
            config.save_to_file(path)?;
            log::info!("Created default configuration at {:?}", path);
            return Ok(config);
        }
        Self::from_file(path)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        language_utils::validate_language_code(&self.source_language)
            .with_context(|| format!("Invalid source language: {}", self.source_language))?;
        language_utils::validate_language_code(&self.target_language)
            .with_context(|| format!("Invalid target language: {}", self.target_language))?;

        if self.translation.endpoint.is_empty() {
            return Err(anyhow!("Translation endpoint cannot be empty"));
        }
        if self.dictionary.endpoint.is_empty() {
            return Err(anyhow!("Dictionary endpoint cannot be empty"));
        }

        Ok(())
    }

    /// The `langpair` query value for the translation API, e.g. "en|vi"
    pub fn language_pair(&self) -> String {
        format!("{}|{}", self.source_language, self.target_language)
    }
}
