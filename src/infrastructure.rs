//! Infrastructure layer for HTTP fetching, HTML parsing and logging
//!
//! This module provides the HTTP client used against the external results
//! aggregator, the parsing stack that turns its pages into domain records,
//! and the engine-wide configuration and error types.

pub mod config;
pub mod http_client;
pub mod logging;
pub mod parsing;
pub mod scrape_error;

// Re-export commonly used items
pub use config::{OperatorConfig, OperatorRegistry, ScraperConfig};
pub use http_client::{HttpClient, PageFetcher};
pub use logging::init_logging;
pub use parsing::result_page_parser::{PageContext, ResultPageParser};
pub use scrape_error::{ScrapeError, ScrapeResult};
