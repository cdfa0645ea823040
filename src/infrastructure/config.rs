//! Engine configuration: operator registry and HTTP/selector settings
//!
//! The registry is an explicit immutable table handed to the engine rather
//! than a process-wide global, so tests can inject a reduced one. Adding an
//! operator means appending an entry here and re-checking the sub-lottery
//! pattern priority order if its codes introduce new ambiguity.

use serde::{Deserialize, Serialize};

/// External results aggregator constants
pub mod resultados_site {
    /// Base URL of the results aggregator
    pub const BASE_URL: &str = "https://www.deunopostehoje.com.br";

    /// Path segment under which per-operator result pages live
    pub const RESULTS_PATH: &str = "resultado-do-jogo-do-bicho";
}

/// Default values for engine behavior
pub mod defaults {
    /// Per-fetch timeout so one unresponsive operator cannot stall the batch
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

    /// Browser-mimicking user agent; the aggregator rejects obvious bots
    pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

    pub const ACCEPT: &str =
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

    pub const ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";

    /// A draw block needs at least this many valid prize rows to be emitted
    pub const MIN_PREMIOS: usize = 5;

    /// Prizes beyond this position count are discarded
    pub const MAX_PREMIOS: usize = 7;
}

/// One regional operator (banca) whose result page is scraped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorConfig {
    /// Short code used in logs, error strings and the public API
    pub code: String,
    /// Path segment of the operator's page on the aggregator
    pub url_segment: String,
    /// Display name persisted as `banca` on every record
    pub display_name: String,
}

impl OperatorConfig {
    pub fn new(code: &str, url_segment: &str, display_name: &str) -> Self {
        Self {
            code: code.to_string(),
            url_segment: url_segment.to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Immutable table of the operators a batch run covers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorRegistry {
    operators: Vec<OperatorConfig>,
}

impl OperatorRegistry {
    pub fn new(operators: Vec<OperatorConfig>) -> Self {
        Self { operators }
    }

    pub fn get(&self, code: &str) -> Option<&OperatorConfig> {
        self.operators.iter().find(|op| op.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperatorConfig> {
        self.operators.iter()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl Default for OperatorRegistry {
    /// The production operator table.
    fn default() -> Self {
        Self::new(vec![
            OperatorConfig::new("rio", "rio-de-janeiro", "Rio de Janeiro"),
            OperatorConfig::new("sp", "sao-paulo", "São Paulo"),
            OperatorConfig::new("look", "look-goias", "Look Goiás"),
            OperatorConfig::new("lotep", "lotep-paraiba", "LOTEP Paraíba"),
            OperatorConfig::new("lotece", "lotece-ceara", "LOTECE Ceará"),
            OperatorConfig::new("bahia", "paratodos-bahia", "Paratodos Bahia"),
            OperatorConfig::new("minas", "minas-gerais", "Minas Gerais"),
            OperatorConfig::new("bsb", "brasilia", "Brasília"),
            OperatorConfig::new("pe", "pernambuco", "Pernambuco"),
            OperatorConfig::new("nacional", "nacional", "Nacional"),
        ])
    }
}

/// HTTP and selector settings for the scraping engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Base URL of the results aggregator
    pub base_url: String,

    /// User agent string for HTTP requests
    pub user_agent: String,

    /// Accept header sent with every request
    pub accept: String,

    /// Accept-Language header sent with every request
    pub accept_language: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Selectors for draw-announcement headers - multiple fallbacks,
    /// first selector yielding any elements wins
    pub header_selectors: Vec<String>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: resultados_site::BASE_URL.to_string(),
            user_agent: defaults::USER_AGENT.to_string(),
            accept: defaults::ACCEPT.to_string(),
            accept_language: defaults::ACCEPT_LANGUAGE.to_string(),
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            header_selectors: vec![
                ".resultado h2".to_string(),
                "h2, h3".to_string(),
                "strong".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_ten_operators() {
        let registry = OperatorRegistry::default();
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn lookup_by_code() {
        let registry = OperatorRegistry::default();
        let op = registry.get("lotep").expect("lotep registered");
        assert_eq!(op.url_segment, "lotep-paraiba");
        assert_eq!(op.display_name, "LOTEP Paraíba");
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn injected_registry_replaces_default_table() {
        let registry = OperatorRegistry::new(vec![OperatorConfig::new("x", "x-seg", "X")]);
        assert_eq!(registry.len(), 1);
        assert!(registry.get("rio").is_none());
    }
}
