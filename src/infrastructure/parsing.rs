//! HTML parsing for operator result pages
//!
//! Trait-based parsing architecture with fallback selector strategies and
//! graceful degradation: a malformed draw block is skipped, never fatal.

pub mod header_parser;
pub mod prize_table_parser;
pub mod result_page_parser;

// Re-export public types
pub use header_parser::ParsedHeader;
pub use result_page_parser::{PageContext, ResultPageParser};

use scraper::Html;

use crate::infrastructure::scrape_error::ScrapeResult;

/// Parser with page-level context
pub trait ContextualParser {
    type Output;
    type Context;

    /// Parse a document with contextual information
    fn parse_with_context(&self, html: &Html, context: &Self::Context)
    -> ScrapeResult<Self::Output>;
}
