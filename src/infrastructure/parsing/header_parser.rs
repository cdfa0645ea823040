//! Draw header interpretation
//!
//! Converts the free text of one draw-announcement header into a time, a
//! canonical sub-lottery code and an optional date. Classification walks an
//! ordered priority list of code patterns; the first match wins and
//! evaluation stops there. More specific codes (PT-RIO, PTM, PTV, PTN) must
//! stay ahead of the bare PT they would otherwise be shadowed by - swapping
//! that order misclassifies every PTM draw as PT.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Literal prefix carried by every draw announcement on the aggregator
const HEADER_PREFIX: &str = "Resultado do Jogo do Bicho";

/// Code used when no pattern matches and the header yields no residue text
const DEFAULT_LOTERIA: &str = "GERAL";

/// Tolerant time token: `H:MM`, `HH:MM`, `HhMM` or bare `Hh`.
/// Minute defaults to "00" when the pattern captures none.
static TIME_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?::(\d{2})|h(\d{2})?)").expect("invalid regex: time token")
});

/// `DD/MM/YYYY` anywhere in the header text
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})/(\d{2})/(\d{4})").expect("invalid regex: header date"));

/// Everything that is not a letter or hyphen, for the fallback code extraction
static NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}-]").expect("invalid regex: non-letter"));

/// Ordered (pattern, canonical code) priority list. First match wins.
///
/// Order is load-bearing: PT-RIO/PTM/PTV/PTN before PT, since `\bPT\b`
/// also matches the PT of "PT-RIO".
static LOTERIA_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bPT[\s-]?RIO\b", "PT-RIO"),
        (r"(?i)\bPTM\b", "PTM"),
        (r"(?i)\bPTV\b", "PTV"),
        (r"(?i)\bPTN\b", "PTN"),
        (r"(?i)\bCORUJA\b", "CORUJA"),
        (r"(?i)\bFEDERAL\b", "FEDERAL"),
        (r"(?i)\bLOOK\b", "LOOK"),
        (r"(?i)\bLOTEP\b", "LOTEP"),
        (r"(?i)\bLOTECE\b", "LOTECE"),
        (r"(?i)\bMALUCA\b", "MALUCA"),
        (r"(?i)\bLBR\b", "LBR"),
        (r"(?i)\bPT\b", "PT"),
    ]
    .into_iter()
    .map(|(pattern, code)| {
        (
            Regex::new(pattern).expect("invalid regex: loteria pattern"),
            code,
        )
    })
    .collect()
});

/// Synonyms the aggregator prints instead of the canonical code.
const CANONICAL_CODES: &[(&str, &str)] = &[
    ("TARDE", "PT"),
    ("MANHA", "PTM"),
    ("MANHÃ", "PTM"),
    ("NOITE", "PTN"),
    ("COR", "CORUJA"),
    ("PTRIO", "PT-RIO"),
];

/// Interpreted draw header. Transient, one per header block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHeader {
    /// Always HH:MM, minute "00" when the source text carried none
    pub horario: String,
    /// Canonical sub-lottery code
    pub loteria: String,
    /// ISO date when the header carried one; caller supplies the default
    pub data: Option<String>,
}

/// Interpret one header text blob. `None` means the blob carries no time
/// token and is not a draw header - the caller discards it silently.
pub fn parse_header_text(raw: &str) -> Option<ParsedHeader> {
    let text = raw.trim();
    let text = text.strip_prefix(HEADER_PREFIX).unwrap_or(text);

    let caps = TIME_TOKEN_RE.captures(text)?;
    let token = caps.get(0)?;
    let hour = caps.get(1)?.as_str();
    let minute = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map_or("00", |m| m.as_str());
    let horario = format!("{hour:0>2}:{minute}");

    let loteria = canonicalize(&classify_loteria(text, token.end()));
    let data = extract_date(raw);

    Some(ParsedHeader {
        horario,
        loteria,
        data,
    })
}

/// Priority-ranked classification with the comma-bounded residue fallback.
fn classify_loteria(text: &str, after_time: usize) -> String {
    for (pattern, code) in LOTERIA_PATTERNS.iter() {
        if pattern.is_match(text) {
            return (*code).to_string();
        }
    }

    let rest = text[after_time..].split(',').next().unwrap_or("");
    let cleaned = NON_LETTER_RE.replace_all(rest, "").to_uppercase();
    if cleaned.is_empty() {
        DEFAULT_LOTERIA.to_string()
    } else {
        cleaned
    }
}

fn canonicalize(code: &str) -> String {
    CANONICAL_CODES
        .iter()
        .find(|(synonym, _)| *synonym == code)
        .map_or_else(|| code.to_string(), |(_, canonical)| (*canonical).to_string())
}

/// Extract a DD/MM/YYYY date and convert it to ISO. Impossible calendar
/// dates are discarded rather than propagated.
pub fn extract_date(text: &str) -> Option<String> {
    let caps = DATE_RE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Some(date.format("%Y-%m-%d").to_string()),
        None => {
            warn!("discarding impossible header date {}/{}/{}", day, month, year);
            None
        }
    }
}
