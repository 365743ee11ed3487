use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search credential {0} is not set")]
    MissingCredential(String),
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("search provider returned an error: {0}")]
    Provider(String),
}

/// One organic result. Only `title` is guaranteed by providers.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: Option<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

// --- SerpApi (Google engine) ---

pub struct SerpApiClient {
    api_key: String,
    results_per_query: usize,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<SerpApiResult>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerpApiResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    snippet: Option<String>,
}

impl SerpApiClient {
    pub fn new(api_key: &str, results_per_query: usize) -> Result<Self, SearchError> {
        Ok(Self {
            api_key: api_key.to_string(),
            results_per_query,
            client: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?,
        })
    }

    /// Build a client from the credential held in environment variable `var`.
    pub fn from_env(var: &str, results_per_query: usize) -> Result<Self, SearchError> {
        let key = std::env::var(var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SearchError::MissingCredential(var.to_string()))?;
        Self::new(&key, results_per_query)
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        info!(query, num = self.results_per_query, "SerpApi search");

        let num = self.results_per_query.to_string();
        let resp = self
            .client
            .get(SERPAPI_URL)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data: SerpApiResponse = resp.json().await?;
        into_hits(data)
    }
}

fn into_hits(data: SerpApiResponse) -> Result<Vec<SearchHit>, SearchError> {
    if let Some(err) = data.error {
        return Err(SearchError::Provider(err));
    }
    Ok(data
        .organic_results
        .into_iter()
        .filter(|r| !r.title.is_empty())
        .map(|r| SearchHit {
            title: r.title,
            url: r.link,
            snippet: r.snippet,
        })
        .collect())
}
