//! HTTP client for fetching operator result pages
//!
//! One GET per (operator, optional date) with browser-mimicking headers.
//! Failures are not retried here; callers needing retries wrap the engine.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use tracing::{debug, info};
use url::Url;

use crate::infrastructure::config::{OperatorConfig, ScraperConfig, resultados_site};
use crate::infrastructure::scrape_error::{ScrapeError, ScrapeResult};

/// Fetches one operator's raw result page. Trait seam so tests and recorded
/// pages can stand in for the live aggregator.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_results_page(
        &self,
        operator: &OperatorConfig,
        date: Option<&str>,
    ) -> ScrapeResult<String>;
}

pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &ScraperConfig) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_str(&config.accept)
                .map_err(|e| anyhow::anyhow!("invalid Accept header: {}", e))?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| anyhow::anyhow!("invalid Accept-Language header: {}", e))?,
        );

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Result page URL for an operator. The optional date is passed through
    /// verbatim as the trailing path segment, exactly as the aggregator
    /// receives it.
    pub fn result_page_url(
        &self,
        operator: &OperatorConfig,
        date: Option<&str>,
    ) -> ScrapeResult<Url> {
        let mut raw = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            resultados_site::RESULTS_PATH,
            operator.url_segment
        );
        if let Some(date) = date {
            raw.push('/');
            raw.push_str(date);
        }
        Url::parse(&raw)
            .map_err(|e| ScrapeError::network(&operator.code, format!("invalid URL {raw}: {e}")))
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch_results_page(
        &self,
        operator: &OperatorConfig,
        date: Option<&str>,
    ) -> ScrapeResult<String> {
        let url = self.result_page_url(operator, date)?;
        info!("🌐 HTTP GET: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ScrapeError::network(&operator.code, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                operator: operator.code.clone(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::network(&operator.code, e.to_string()))?;

        if body.is_empty() {
            return Err(ScrapeError::network(&operator.code, "empty response body"));
        }

        debug!("{}: fetched {} bytes", operator.code, body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ScraperConfig;

    fn client() -> HttpClient {
        HttpClient::new(&ScraperConfig::default()).expect("client builds")
    }

    fn operator() -> OperatorConfig {
        OperatorConfig::new("lotep", "lotep-paraiba", "LOTEP Paraíba")
    }

    #[test]
    fn url_without_date() {
        let url = client().result_page_url(&operator(), None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.deunopostehoje.com.br/resultado-do-jogo-do-bicho/lotep-paraiba"
        );
    }

    #[test]
    fn date_segment_passes_through_verbatim() {
        let url = client()
            .result_page_url(&operator(), Some("2025-03-14"))
            .unwrap();
        assert!(url.as_str().ends_with("/lotep-paraiba/2025-03-14"));
    }
}
