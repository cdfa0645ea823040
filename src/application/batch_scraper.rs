//! Batch scraping engine
//!
//! Drives every registered operator strictly in sequence - the aggregator is
//! someone else's site and a burst of parallel requests changes the load we
//! put on it. One operator's total failure is recorded as an error string
//! and never aborts the batch.

use std::sync::Arc;

use chrono::Local;
use scraper::Html;
use tracing::{info, warn};

use crate::domain::resultado::{ResultadoSorteio, ScrapeBatchResult};
use crate::infrastructure::config::{OperatorConfig, OperatorRegistry, ScraperConfig};
use crate::infrastructure::http_client::{HttpClient, PageFetcher};
use crate::infrastructure::parsing::result_page_parser::{PageContext, ResultPageParser};
use crate::infrastructure::parsing::ContextualParser;
use crate::infrastructure::scrape_error::{ScrapeError, ScrapeResult};

pub struct BatchScrapeEngine {
    registry: OperatorRegistry,
    fetcher: Arc<dyn PageFetcher>,
    parser: ResultPageParser,
}

impl BatchScrapeEngine {
    /// Engine against the live aggregator.
    pub fn new(config: &ScraperConfig, registry: OperatorRegistry) -> anyhow::Result<Self> {
        let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpClient::new(config)?);
        Self::with_fetcher(config, registry, fetcher)
    }

    /// Engine with an injected fetcher (tests, recorded pages).
    pub fn with_fetcher(
        config: &ScraperConfig,
        registry: OperatorRegistry,
        fetcher: Arc<dyn PageFetcher>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            registry,
            fetcher,
            parser: ResultPageParser::with_config(config)?,
        })
    }

    /// Scrape one operator, optionally for a specific date (passed through
    /// verbatim into the URL path).
    pub async fn scrape(
        &self,
        operator_code: &str,
        date: Option<&str>,
    ) -> ScrapeResult<Vec<ResultadoSorteio>> {
        let operator = self
            .registry
            .get(operator_code)
            .ok_or_else(|| ScrapeError::UnknownOperator {
                code: operator_code.to_string(),
            })?;
        self.scrape_operator(operator, date).await
    }

    /// Scrape every registered operator in sequence. Never fails: a failed
    /// operator contributes an error string instead of results.
    pub async fn scrape_all(&self) -> ScrapeBatchResult {
        let mut batch = ScrapeBatchResult::default();

        for operator in self.registry.iter() {
            match self.scrape_operator(operator, None).await {
                Ok(mut resultados) => batch.resultados.append(&mut resultados),
                Err(e) => {
                    warn!("operator {} failed: {}", operator.code, e);
                    batch.errors.push(format!("{}: {}", operator.code, e));
                }
            }
        }

        info!(
            "batch finished: {} result(s), {} error(s)",
            batch.resultados.len(),
            batch.errors.len()
        );
        batch
    }

    async fn scrape_operator(
        &self,
        operator: &OperatorConfig,
        date: Option<&str>,
    ) -> ScrapeResult<Vec<ResultadoSorteio>> {
        let body = self.fetcher.fetch_results_page(operator, date).await?;

        let context = PageContext {
            operator_code: operator.code.clone(),
            banca: operator.display_name.clone(),
            fallback_date: Local::now().format("%Y-%m-%d").to_string(),
        };

        let html = Html::parse_document(&body);
        let resultados = self.parser.parse_with_context(&html, &context)?;
        info!("{}: {} draw(s) extracted", operator.code, resultados.len());
        Ok(resultados)
    }
}
