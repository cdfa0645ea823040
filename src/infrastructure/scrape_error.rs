//! Error types for the scraping engine
//!
//! Failures below the operator level (header, table, rows) degrade to
//! "skip this draw block"; operator-level failures (fetch) degrade to
//! "skip this operator, record the error, continue the batch".

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScrapeError {
    #[error("unknown operator code '{code}'")]
    UnknownOperator { code: String },

    #[error("HTTP {status} from {url}")]
    HttpStatus {
        operator: String,
        status: u16,
        url: String,
    },

    #[error("request failed: {message}")]
    Network { operator: String, message: String },

    #[error("no time token in draw header '{header}'")]
    HeaderUnparsable { header: String },

    #[error("no prize table found for draw {loteria} {horario}")]
    TableNotFound { loteria: String, horario: String },

    #[error("draw has {found} valid prize(s), need at least {minimum}")]
    InsufficientPrizes { found: usize, minimum: usize },
}

impl ScrapeError {
    /// Create a network error for an operator fetch
    pub fn network(operator: &str, message: impl Into<String>) -> Self {
        Self::Network {
            operator: operator.to_string(),
            message: message.into(),
        }
    }

    /// Block-level errors skip a single draw block; everything else
    /// aborts the whole operator's contribution to the batch.
    pub fn is_block_level(&self) -> bool {
        matches!(
            self,
            Self::HeaderUnparsable { .. }
                | Self::TableNotFound { .. }
                | Self::InsufficientPrizes { .. }
        )
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
