//! Canonical draw-result entities produced by the scraping engine
//!
//! A `ResultadoSorteio` is never mutated after construction; persistence
//! (upsert keyed by data/horario/banca) is the storage collaborator's job.

use serde::{Deserialize, Serialize};

/// One prize row of a draw.
///
/// `milhar` is the single source of truth: `centena` is its last three
/// characters and `dezena` the last two of `centena`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premio {
    /// Prize position, 1..=7
    pub posicao: u32,
    /// Four-digit token, zero-padded
    pub milhar: String,
    /// Three-digit suffix of the milhar
    pub centena: String,
    /// Two-digit suffix of the centena
    pub dezena: String,
    /// Animal name as printed on the page (or derived from the grupo)
    pub bicho: String,
    /// Animal group 1..=25, 0 when the page carried none and none could be derived
    pub grupo: u32,
}

/// One draw event of one operator, identified by (data, horario, banca).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultadoSorteio {
    /// ISO date (YYYY-MM-DD)
    pub data: String,
    /// Draw time, always HH:MM
    pub horario: String,
    /// Operator display name from the registry
    pub banca: String,
    /// Canonical sub-lottery code (PT, PTM, PT-RIO, ...)
    pub loteria: String,
    /// 5 to 7 prizes, ordered by posicao ascending
    pub premios: Vec<Premio>,
}

/// Aggregated output of one full batch run across all operators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeBatchResult {
    pub resultados: Vec<ResultadoSorteio>,
    /// One "{operator}: {message}" entry per failed operator
    pub errors: Vec<String>,
}

impl ScrapeBatchResult {
    /// A run with recorded errors is a partial success, not a failure.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty()
    }
}
