use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::DictionaryApi;

/// Client for the Free Dictionary API single-word lookup endpoint
#[derive(Debug)]
pub struct FreeDictionary {
    /// HTTP client for API requests
    client: Client,
    /// Base URL, the looked-up word is appended directly
    endpoint: String,
}

/// One dictionary entry in the response array
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// The headword as the dictionary spells it
    #[serde(default)]
    pub word: String,

    /// Phonetic transcriptions for this entry
    #[serde(default)]
    pub phonetics: Vec<PhoneticEntry>,
}

/// One phonetic transcription attached to an entry
#[derive(Debug, Serialize, Deserialize)]
pub struct PhoneticEntry {
    /// IPA text, often absent when only audio is available
    #[serde(default)]
    pub text: Option<String>,
}

impl FreeDictionary {
    /// Create a new dictionary client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the entry list for a word.
    ///
    /// The API answers 404 for unknown words, which callers treat as a
    /// plain miss rather than a failure.
    pub async fn entries(&self, word: &str) -> Result<Vec<DictionaryEntry>, ProviderError> {
        let url = format!("{}{}", self.endpoint, word);

        let response = self.client.get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: format!("lookup failed for {:?}", word),
            });
        }

        response.json::<Vec<DictionaryEntry>>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Pick the first usable IPA text out of an entry list
    pub fn first_phonetic(entries: &[DictionaryEntry]) -> Option<String> {
        entries.first()?
            .phonetics
            .iter()
            .find_map(|p| {
                p.text.as_ref()
                    .filter(|t| !t.is_empty())
                    .cloned()
            })
    }
}

#[async_trait]
impl DictionaryApi for FreeDictionary {
    async fn phonetic(&self, word: &str) -> Option<String> {
        match self.entries(word).await {
            Ok(entries) => Self::first_phonetic(&entries),
            Err(e) => {
                debug!("Dictionary lookup miss for {:?}: {}", word, e);
                None
            }
        }
    }
}
