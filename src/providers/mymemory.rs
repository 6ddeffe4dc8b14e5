use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::language_utils;
use crate::providers::{Provider, TranslationRequest};

/// MyMemory client for the public translation API
#[derive(Debug)]
pub struct MyMemory {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL (defaults to the public API)
    endpoint: String,
    /// Contact address sent with each request
    contact_email: String,
}

/// Top-level MyMemory response
#[derive(Debug, Deserialize)]
pub struct MyMemoryResponse {
    /// Translation payload
    #[serde(rename = "responseData")]
    pub response_data: Option<ResponseData>,

    /// Service-level status, usually mirrors the HTTP status
    #[serde(rename = "responseStatus", default)]
    pub response_status: Option<serde_json::Value>,

    /// Service-level details or warning message
    #[serde(rename = "responseDetails", default)]
    pub response_details: Option<String>,
}

/// The `responseData` object
#[derive(Debug, Deserialize)]
pub struct ResponseData {
    /// Translated text
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,

    /// Match quality reported by the service
    #[serde(rename = "match", default)]
    pub quality: Option<f64>,
}

impl MyMemoryResponse {
    /// `responseStatus` as a number; the service sends either `200` or `"200"`
    pub fn status_code(&self) -> Option<u16> {
        match self.response_status.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl MyMemory {
    /// Default public endpoint
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.mymemory.translated.net";

    /// Create a new MyMemory client
    pub fn new(endpoint: impl Into<String>, contact_email: impl Into<String>) -> Self {
        Self::new_with_timeout(endpoint, contact_email, Duration::from_secs(30))
    }

    /// Create a new MyMemory client with a request timeout
    pub fn new_with_timeout(
        endpoint: impl Into<String>,
        contact_email: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            endpoint: if endpoint.is_empty() {
                Self::DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint
            },
            contact_email: contact_email.into(),
        }
    }

    /// Build the GET URL for a request, with every parameter URL-encoded
    pub fn request_url(&self, request: &TranslationRequest) -> Result<Url, ProviderError> {
        let langpair = language_utils::language_pair(&request.source_language, &request.target_language)
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let base = format!("{}/get", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("q", request.text.as_str()),
                ("langpair", langpair.as_str()),
                ("de", self.contact_email.as_str()),
            ],
        )
        .map_err(|e| ProviderError::RequestFailed(format!("Invalid endpoint {}: {}", base, e)))
    }

    /// Turn an HTTP status and body into the translated text
    pub fn parse_response(status: u16, body: &str) -> Result<String, ProviderError> {
        if !(200..300).contains(&status) {
            return Err(ProviderError::ApiError {
                status_code: status,
                message: body.chars().take(200).collect(),
            });
        }

        let response: MyMemoryResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        // Quota and validation failures come back as HTTP 200 with the
        // warning in translatedText; only responseStatus tells them apart
        if let Some(code) = response.status_code() {
            if code != 200 {
                let message = response
                    .response_details
                    .filter(|details| !details.is_empty())
                    .or_else(|| response.response_data.and_then(|data| data.translated_text))
                    .unwrap_or_default();
                return Err(ProviderError::ApiError {
                    status_code: code,
                    message: message.chars().take(200).collect(),
                });
            }
        }

        response
            .response_data
            .and_then(|data| data.translated_text)
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::MissingTranslation)
    }
}

#[async_trait]
impl Provider for MyMemory {
    async fn translate(&self, request: TranslationRequest) -> Result<String, ProviderError> {
        let url = self.request_url(&request)?;

        let response = self.client.get(url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to send request to MyMemory API: {}", e)))?;

        let status = response.status();
        let body = response.text().await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to read MyMemory API response: {}", e)))?;

        debug!("MyMemory response ({}): {}", status, body.chars().take(200).collect::<String>());

        let result = Self::parse_response(status.as_u16(), &body);
        if let Err(e) = &result {
            error!("MyMemory API error: {}", e);
        }
        result
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.translate(TranslationRequest::new("Hello", "en", "es")).await?;
        Ok(())
    }
}
