/*!
 * Jikan (MyAnimeList) catalog client.
 *
 * Only the full-details endpoint is implemented; it is the one whose
 * synopsis gets translated.
 */

use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::CatalogError;

/// Genre tag attached to an anime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub mal_id: u64,
    pub name: String,
}

/// Subset of Jikan's `anime/{id}/full` payload used by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetails {
    pub mal_id: u64,
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl AnimeDetails {
    /// English title when Jikan has one, the default title otherwise
    pub fn display_title(&self) -> &str {
        self.title_english.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    data: AnimeDetails,
}

/// Client for the Jikan v4 API
#[derive(Debug)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.jikan.moe/v4";

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// URL of the full-details resource for `id`
    pub fn details_url(&self, id: u64) -> String {
        format!("{}/anime/{}/full", self.base_url.trim_end_matches('/'), id)
    }

    /// Fetch the full details of one anime
    pub async fn fetch_anime_details(&self, id: u64) -> Result<AnimeDetails, CatalogError> {
        let url = self.details_url(id);
        debug!("Fetching anime details from {}", url);

        let response = self.client.get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        let body = response.text().await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let result = Self::parse_details(id, status, &body);
        if let Err(e) = &result {
            error!("Error fetching anime details: {}", e);
        }
        result
    }

    /// Decode a details response
    pub fn parse_details(id: u64, status: StatusCode, body: &str) -> Result<AnimeDetails, CatalogError> {
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status_code: status.as_u16(),
            });
        }

        let envelope: DetailsEnvelope = serde_json::from_str(body)
            .map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL, Duration::from_secs(30))
    }
}
