/*!
 * Per-word phonetic (IPA) resolution.
 *
 * This module splits the source text into whitespace-delimited tokens and
 * resolves an IPA transcription for each one through the dictionary API.
 * A direct lookup that misses falls back to progressively simpler keys
 * (singular form, contraction stem). All tokens resolve concurrently and
 * the output keeps the input token order.
 */

use std::sync::Arc;

use futures::future::join_all;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::providers::DictionaryApi;

/// Punctuation stripped from tokens before dictionary lookup
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()?]").expect("punctuation pattern is valid")
});

/// One token of the source text with its resolved transcription.
///
/// `word` keeps the token exactly as it appeared in the input, punctuation
/// included, even though the lookup used a cleaned variant.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPhonetic {
    /// The original token text
    pub word: String,
    /// IPA transcription, absent when every lookup missed
    pub ipa: Option<String>,
}

/// Split text on whitespace runs, dropping empty tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Strip the fixed punctuation set from a token
pub fn clean_token(token: &str) -> String {
    PUNCTUATION.replace_all(token, "").into_owned()
}

/// Lookup keys for a cleaned token, in fallback order.
///
/// The primary key is the cleaned token itself. A trailing `s` suggests a
/// plural or possessive, so the singular form is tried next; an apostrophe
/// suggests a contraction, so the prefix before it closes the chain.
pub fn fallback_keys(cleaned: &str) -> Vec<String> {
    let mut keys = vec![cleaned.to_string()];

    if cleaned.to_lowercase().ends_with('s') {
        let singular = &cleaned[..cleaned.len() - 1];
        if !singular.is_empty() && !keys.iter().any(|k| k == singular) {
            keys.push(singular.to_string());
        }
    }

    if let Some(stem) = cleaned.split('\'').next() {
        if stem != cleaned && !stem.is_empty() && !keys.iter().any(|k| k == stem) {
            keys.push(stem.to_string());
        }
    }

    keys
}

/// Resolves IPA transcriptions for every token of a text
#[derive(Debug, Clone)]
pub struct PhoneticResolver {
    /// Dictionary client used for single-word lookups
    dictionary: Arc<dyn DictionaryApi>,
}

impl PhoneticResolver {
    /// Create a new resolver over the given dictionary client
    pub fn new(dictionary: Arc<dyn DictionaryApi>) -> Self {
        Self { dictionary }
    }

    /// Resolve one token through the fallback chain.
    ///
    /// Tokens that strip to nothing (pure punctuation) never hit the
    /// dictionary at all.
    async fn resolve_one(&self, token: &str) -> WordPhonetic {
        let cleaned = clean_token(token);
        if cleaned.is_empty() {
            trace!("Token {:?} is punctuation only, skipping lookup", token);
            return WordPhonetic { word: token.to_string(), ipa: None };
        }

        let mut ipa = None;
        for key in fallback_keys(&cleaned) {
            ipa = self.dictionary.phonetic(&key).await;
            if ipa.is_some() {
                break;
            }
        }

        if ipa.is_none() {
            debug!("No phonetic found for {:?}", token);
        }

        WordPhonetic { word: token.to_string(), ipa }
    }

    /// Resolve every token of the text concurrently.
    ///
    /// Output order matches the token order of the input regardless of
    /// which lookups complete first, and the output length equals the
    /// token count.
    pub async fn resolve_all(&self, text: &str) -> Vec<WordPhonetic> {
        let tokens = tokenize(text);
        let lookups = tokens.iter().map(|token| self.resolve_one(token));
        join_all(lookups).await
    }
}
