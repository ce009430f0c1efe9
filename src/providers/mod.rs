/*!
 * Provider implementations for the upstream HTTP APIs.
 *
 * This module contains client implementations for the two services the
 * pipeline talks to:
 * - MyMemory: machine translation API
 * - Free Dictionary API: per-word phonetic (IPA) lookup
 */

use async_trait::async_trait;
use std::fmt::Debug;

/// Outcome of a translation request.
///
/// The upstream API reports service-level failures inside an HTTP 200
/// response, so a failed call still produces a displayable string rather
/// than an error. Transport and service failures are kept distinct here
/// even though both render as placeholder text.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    /// A genuine translation from the service
    Translated(String),
    /// The service answered but reported an error, with its detail message
    ServiceError(String),
    /// The service could not be reached at all
    Unreachable,
}

impl TranslationOutcome {
    /// Render the outcome the way the presentation layer shows it
    pub fn display_text(&self) -> String {
        match self {
            Self::Translated(text) => text.clone(),
            Self::ServiceError(detail) => format!("Lỗi dịch: {}", detail),
            Self::Unreachable => "Không thể kết nối đến máy chủ dịch.".to_string(),
        }
    }

    /// Whether this outcome carries a real translation
    pub fn is_translated(&self) -> bool {
        matches!(self, Self::Translated(_))
    }
}

/// Trait for translation API clients
///
/// Implementations absorb transport and service failures into
/// `TranslationOutcome` variants; a call never fails with an error.
#[async_trait]
pub trait TranslationApi: Send + Sync + Debug {
    /// Translate the given text using the configured language pair
    async fn translate(&self, text: &str) -> TranslationOutcome;
}

/// Trait for dictionary API clients
///
/// A lookup either yields an IPA transcription or nothing; transport,
/// HTTP and parse failures all collapse to `None`.
#[async_trait]
pub trait DictionaryApi: Send + Sync + Debug {
    /// Look up the phonetic transcription for a single word
    async fn phonetic(&self, word: &str) -> Option<String>;
}

pub mod dictionary;
pub mod mock;
pub mod mymemory;
