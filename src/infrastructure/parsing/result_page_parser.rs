//! Result page parsing
//!
//! Walks one operator page: every draw-announcement header is interpreted
//! and paired with its prize table. Blocks without a time token, without a
//! table or with too few prizes are skipped, never fatal for the page.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::domain::resultado::ResultadoSorteio;
use crate::infrastructure::config::ScraperConfig;
use crate::infrastructure::parsing::{ContextualParser, header_parser, prize_table_parser};
use crate::infrastructure::scrape_error::ScrapeResult;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("invalid selector: title"));

/// Per-page context: which operator the page belongs to and the date used
/// when neither a header nor the page title carries one.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub operator_code: String,
    /// Registry display name, persisted as `banca`
    pub banca: String,
    /// Scrape-run date (ISO), the last-resort default
    pub fallback_date: String,
}

/// Parser for one operator's result page.
pub struct ResultPageParser {
    /// Compiled header selectors - first one yielding any elements wins
    header_selectors: Vec<Selector>,
}

impl ResultPageParser {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(&ScraperConfig::default())
    }

    pub fn with_config(config: &ScraperConfig) -> anyhow::Result<Self> {
        Ok(Self {
            header_selectors: compile_selectors(&config.header_selectors)?,
        })
    }

    /// Every element matching the draw-header marker. Whether a match really
    /// announces a draw is decided later by the time-token check.
    fn draw_headers<'a>(&self, html: &'a Html) -> Vec<ElementRef<'a>> {
        for selector in &self.header_selectors {
            let found: Vec<ElementRef<'a>> = html.select(selector).collect();
            if !found.is_empty() {
                return found;
            }
        }
        Vec::new()
    }

    /// Date printed in the page `<title>`, used as the default for headers
    /// that carry none.
    fn title_date(&self, html: &Html) -> Option<String> {
        let title = html.select(&TITLE_SELECTOR).next()?;
        header_parser::extract_date(&title.text().collect::<String>())
    }
}

impl ContextualParser for ResultPageParser {
    type Output = Vec<ResultadoSorteio>;
    type Context = PageContext;

    fn parse_with_context(
        &self,
        html: &Html,
        context: &Self::Context,
    ) -> ScrapeResult<Self::Output> {
        let default_date = self
            .title_date(html)
            .unwrap_or_else(|| context.fallback_date.clone());

        let mut resultados = Vec::new();

        for header in self.draw_headers(html) {
            let text = header.text().collect::<String>();

            let Some(parsed) = header_parser::parse_header_text(&text) else {
                debug!(
                    "{}: skipping header without time token: '{}'",
                    context.operator_code,
                    text.trim()
                );
                continue;
            };

            let Some(table) = prize_table_parser::locate_prize_table(header) else {
                warn!(
                    "{}: no prize table for draw {} {}",
                    context.operator_code, parsed.loteria, parsed.horario
                );
                continue;
            };

            let rows = prize_table_parser::extract_raw_rows(table);
            let premios = match prize_table_parser::normalize_premios(rows) {
                Ok(premios) => premios,
                Err(e) => {
                    warn!(
                        "{}: skipping draw {} {}: {}",
                        context.operator_code, parsed.loteria, parsed.horario, e
                    );
                    continue;
                }
            };

            resultados.push(ResultadoSorteio {
                data: parsed.data.unwrap_or_else(|| default_date.clone()),
                horario: parsed.horario,
                banca: context.banca.clone(),
                loteria: parsed.loteria,
                premios,
            });
        }

        Ok(resultados)
    }
}

/// Compile multiple selector strings, warning about the ones that fail.
fn compile_selectors(selector_strings: &[String]) -> anyhow::Result<Vec<Selector>> {
    let mut selectors = Vec::new();
    let mut errors = Vec::new();

    for selector_str in selector_strings {
        match Selector::parse(selector_str) {
            Ok(selector) => selectors.push(selector),
            Err(e) => {
                warn!("failed to compile selector '{}': {}", selector_str, e);
                errors.push(format!("'{selector_str}': {e}"));
            }
        }
    }

    if selectors.is_empty() {
        return Err(anyhow::anyhow!(
            "no valid header selectors compiled. Errors: {}",
            errors.join(", ")
        ));
    }

    Ok(selectors)
}
