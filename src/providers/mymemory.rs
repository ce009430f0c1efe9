use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{TranslationApi, TranslationOutcome};

/// MyMemory client for the public machine-translation API
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the translation endpoint
    endpoint: String,
    /// Language pair query value, e.g. "en|vi"
    lang_pair: String,
}

/// Response envelope from the MyMemory API
#[derive(Debug, Serialize, Deserialize)]
pub struct MyMemoryResponse {
    /// Service-level status code, 200 on success
    #[serde(rename = "responseStatus")]
    pub response_status: i64,

    /// Payload carrying the translated text
    #[serde(rename = "responseData")]
    pub response_data: Option<MyMemoryData>,

    /// Detail message on service-level errors
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<String>,
}

/// Translation payload inside a MyMemory response
#[derive(Debug, Serialize, Deserialize)]
pub struct MyMemoryData {
    /// The translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl MyMemory {
    /// Create a new MyMemory client
    pub fn new(endpoint: impl Into<String>, lang_pair: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
            lang_pair: lang_pair.into(),
        }
    }

    /// Build the request URL for the given text
    fn request_url(&self, text: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair("langpair", &self.lang_pair);
        Ok(url)
    }

    /// Issue the GET request and parse the response envelope
    pub async fn fetch(&self, text: &str) -> Result<MyMemoryResponse, ProviderError> {
        let url = self.request_url(text)?;

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response.json::<MyMemoryResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    /// Interpret a parsed response envelope.
    ///
    /// The service reports its own failures inside an HTTP 200 response
    /// through `responseStatus`, so a 200 envelope with a non-200 status
    /// is a service error, not a transport one.
    pub fn interpret(response: MyMemoryResponse) -> TranslationOutcome {
        if response.response_status == 200 {
            match response.response_data {
                Some(data) => TranslationOutcome::Translated(data.translated_text),
                None => TranslationOutcome::ServiceError(
                    "missing translation payload".to_string(),
                ),
            }
        } else {
            let detail = response.response_details
                .unwrap_or_else(|| format!("status {}", response.response_status));
            TranslationOutcome::ServiceError(detail)
        }
    }
}

#[async_trait]
impl TranslationApi for MyMemory {
    async fn translate(&self, text: &str) -> TranslationOutcome {
        match self.fetch(text).await {
            Ok(response) => {
                debug!("Translation response status: {}", response.response_status);
                Self::interpret(response)
            }
            Err(e) => {
                error!("Translation request failed: {}", e);
                TranslationOutcome::Unreachable
            }
        }
    }
}
