/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockTranslation::working()` - always succeeds with translated text
 * - `MockTranslation::service_error(..)` - simulates an in-band API error
 * - `MockTranslation::unreachable()` - simulates a transport failure
 * - `MockDictionary::with_entries(..)` - serves IPA from a fixed table
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::providers::{DictionaryApi, TranslationApi, TranslationOutcome};

/// Behavior mode for the mock translation provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockTranslationBehavior {
    /// Always succeeds, echoing the input with a marker prefix
    Working,
    /// Succeeds with a fixed translation regardless of input
    Fixed(String),
    /// Simulates the service reporting an error in-band
    ServiceError(String),
    /// Simulates a transport failure
    Unreachable,
    /// Simulates a slow response before succeeding
    Slow { delay_ms: u64 },
}

/// Mock translation provider for testing orchestration behavior
#[derive(Debug)]
pub struct MockTranslation {
    /// Behavior mode
    behavior: MockTranslationBehavior,
    /// Number of translate calls made
    call_count: Arc<AtomicUsize>,
}

impl MockTranslation {
    /// Create a new mock with the specified behavior
    pub fn new(behavior: MockTranslationBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock that echoes its input
    pub fn working() -> Self {
        Self::new(MockTranslationBehavior::Working)
    }

    /// Create a mock that always answers with the given translation
    pub fn fixed(translation: impl Into<String>) -> Self {
        Self::new(MockTranslationBehavior::Fixed(translation.into()))
    }

    /// Create a mock that simulates an in-band service error
    pub fn service_error(detail: impl Into<String>) -> Self {
        Self::new(MockTranslationBehavior::ServiceError(detail.into()))
    }

    /// Create a mock that simulates a transport failure
    pub fn unreachable() -> Self {
        Self::new(MockTranslationBehavior::Unreachable)
    }

    /// Number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, survives moving the mock
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait]
impl TranslationApi for MockTranslation {
    async fn translate(&self, text: &str) -> TranslationOutcome {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockTranslationBehavior::Working => {
                TranslationOutcome::Translated(format!("[VI] {}", text))
            }
            MockTranslationBehavior::Fixed(translation) => {
                TranslationOutcome::Translated(translation.clone())
            }
            MockTranslationBehavior::ServiceError(detail) => {
                TranslationOutcome::ServiceError(detail.clone())
            }
            MockTranslationBehavior::Unreachable => TranslationOutcome::Unreachable,
            MockTranslationBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                TranslationOutcome::Translated(format!("[VI] {}", text))
            }
        }
    }
}

/// Mock dictionary provider serving IPA from a fixed word table
#[derive(Debug)]
pub struct MockDictionary {
    /// Known word -> IPA mappings
    entries: HashMap<String, String>,
    /// Number of lookups made
    call_count: Arc<AtomicUsize>,
    /// Every word that was looked up, in call order
    looked_up: Arc<Mutex<Vec<String>>>,
    /// Per-lookup artificial delay, for completion-order tests
    delay_ms: Option<u64>,
}

impl MockDictionary {
    /// Create a mock with no known words; every lookup misses
    pub fn empty() -> Self {
        Self::with_entries(&[])
    }

    /// Create a mock serving the given (word, ipa) pairs
    pub fn with_entries(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs.iter()
                .map(|(w, i)| (w.to_string(), i.to_string()))
                .collect(),
            call_count: Arc::new(AtomicUsize::new(0)),
            looked_up: Arc::new(Mutex::new(Vec::new())),
            delay_ms: None,
        }
    }

    /// Add an artificial per-lookup delay
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Number of lookups made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Shared handle to the call counter, survives moving the mock
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }

    /// Words looked up so far, in call order
    pub fn looked_up_words(&self) -> Vec<String> {
        self.looked_up.lock().unwrap().clone()
    }

    /// Shared handle to the lookup log, survives moving the mock
    pub fn lookup_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.looked_up)
    }
}

#[async_trait]
impl DictionaryApi for MockDictionary {
    async fn phonetic(&self, word: &str) -> Option<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.looked_up.lock().unwrap().push(word.to_string());

        if let Some(delay_ms) = self.delay_ms {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
        }

        self.entries.get(word).cloned()
    }
}
