use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::TARGET_WEB_REQUEST;

pub const NO_RECENT_NEWS: &str = "No recent news found.";

const DIGEST_HEADLINES: usize = 5;

/// Capability: look up recent headlines for a keyword.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn recent_headlines(&self, keywords: &str) -> Result<Vec<String>, ServiceError>;
}

#[derive(Deserialize)]
struct NewsResponse {
    #[serde(default)]
    news: Vec<NewsArticle>,
}

#[derive(Deserialize)]
struct NewsArticle {
    title: String,
}

/// Currents API client. One GET per lookup, English-language results only.
pub struct CurrentsClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl CurrentsClient {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        CurrentsClient {
            client: Client::new(),
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl HeadlineSource for CurrentsClient {
    async fn recent_headlines(&self, keywords: &str) -> Result<Vec<String>, ServiceError> {
        info!(target: TARGET_WEB_REQUEST, "Fetching recent news for '{}'", keywords);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("language", "en"),
                ("keywords", keywords),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| ServiceError::upstream_news(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(target: TARGET_WEB_REQUEST, "News lookup returned status {}: {}", status, body);
            return Err(ServiceError::upstream_news(body));
        }

        let payload: NewsResponse = response
            .json()
            .await
            .map_err(|err| ServiceError::upstream_news(err.to_string()))?;

        info!(target: TARGET_WEB_REQUEST, "News lookup returned {} articles", payload.news.len());

        Ok(payload
            .news
            .into_iter()
            .map(|article| article.title)
            .collect())
    }
}

/// Reduce a headline list to the plain-text digest interpolated into prompts:
/// up to five headlines, one per line, each prefixed with "- ". An empty list
/// produces the sentinel text instead.
pub fn digest(headlines: &[String]) -> String {
    if headlines.is_empty() {
        return NO_RECENT_NEWS.to_string();
    }

    headlines
        .iter()
        .take(DIGEST_HEADLINES)
        .map(|title| format!("- {}", title))
        .collect::<Vec<_>>()
        .join("\n")
}
