//! Multi-operator jogo do bicho result scraping engine
//!
//! Fetches raw result pages from the external aggregator for each regional
//! operator (banca) and normalizes their loosely structured draw headers and
//! prize tables into canonical `ResultadoSorteio` records. Persistence and
//! bet settlement are downstream collaborators; this crate only returns
//! records.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export the public surface for easier access
pub use application::batch_scraper::BatchScrapeEngine;
pub use domain::resultado::{Premio, ResultadoSorteio, ScrapeBatchResult};
pub use infrastructure::config::{OperatorConfig, OperatorRegistry, ScraperConfig};
pub use infrastructure::http_client::PageFetcher;
pub use infrastructure::scrape_error::{ScrapeError, ScrapeResult};
