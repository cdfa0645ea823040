//! Prize table location, row extraction and normalization
//!
//! The table belonging to a draw header is found through an ordered strategy
//! chain; each strategy runs only when the previous one yields nothing. Rows
//! become raw prize tuples, and normalization derives the canonical
//! milhar/centena/dezena tokens bet settlement depends on.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::domain::grupos;
use crate::domain::resultado::Premio;
use crate::infrastructure::config::defaults::{MAX_PREMIOS, MIN_PREMIOS};
use crate::infrastructure::scrape_error::{ScrapeError, ScrapeResult};

static DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("invalid regex: digits"));

static TABLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("invalid selector: table"));

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("invalid selector: tr"));

static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("invalid selector: td"));

/// Raw values lifted from one table row, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPrizeRow {
    pub posicao: u32,
    /// Cell text verbatim (trimmed); length >= 2 or the row was dropped
    pub milhar: String,
    /// 0 when the cell was unparsable
    pub grupo: u32,
    pub bicho: String,
}

/// Locate the prize table for a draw header. Strategies, in order:
/// (a) the header's immediate next sibling, if it is itself a table;
/// (b) the nearest table following the header in document order;
/// (c) a table nested within the header's immediate next sibling container.
pub fn locate_prize_table<'a>(header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    next_sibling_table(header)
        .or_else(|| following_table(header))
        .or_else(|| table_within_next_sibling(header))
}

fn next_sibling_element<'a>(header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    header.next_siblings().find_map(ElementRef::wrap)
}

fn next_sibling_table<'a>(header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    next_sibling_element(header).filter(|el| el.value().name() == "table")
}

fn following_table<'a>(header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    header
        .tree()
        .root()
        .descendants()
        .skip_while(|node| node.id() != header.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
}

fn table_within_next_sibling<'a>(header: ElementRef<'a>) -> Option<ElementRef<'a>> {
    next_sibling_element(header)?.select(&TABLE_SELECTOR).next()
}

/// Extract raw prize tuples from the rows of a located table.
///
/// A row needs at least 4 `td` values (label rows use `th` and fall out
/// here); its raw milhar needs length >= 2, shorter values are noise rows
/// and are silently dropped.
pub fn extract_raw_rows(table: ElementRef<'_>) -> Vec<RawPrizeRow> {
    let mut rows = Vec::new();

    for (index, tr) in table.select(&ROW_SELECTOR).enumerate() {
        let cells: Vec<String> = tr.select(&CELL_SELECTOR).map(cell_text).collect();
        if cells.len() < 4 {
            continue;
        }

        let milhar = cells[1].clone();
        if milhar.chars().count() < 2 {
            debug!("dropping noise row with milhar '{}'", milhar);
            continue;
        }

        rows.push(RawPrizeRow {
            posicao: parse_digits(&cells[0]).unwrap_or(index as u32 + 1),
            milhar,
            grupo: parse_digits(&cells[2]).unwrap_or(0),
            bicho: cells[3].clone(),
        });
    }

    rows
}

/// Normalize raw rows into canonical prizes: milhar zero-padded to exactly
/// 4 characters, centena its 3-character suffix, dezena the 2-character
/// suffix of that. At least `MIN_PREMIOS` rows must survive; anything past
/// `MAX_PREMIOS` by position order is discarded.
pub fn normalize_premios(rows: Vec<RawPrizeRow>) -> ScrapeResult<Vec<Premio>> {
    if rows.len() < MIN_PREMIOS {
        return Err(ScrapeError::InsufficientPrizes {
            found: rows.len(),
            minimum: MIN_PREMIOS,
        });
    }

    let mut premios: Vec<Premio> = rows.into_iter().map(normalize_row).collect();
    premios.sort_by_key(|p| p.posicao);
    premios.truncate(MAX_PREMIOS);
    Ok(premios)
}

fn normalize_row(row: RawPrizeRow) -> Premio {
    let milhar = suffix_padded(&row.milhar, 4);
    let centena = suffix_padded(&milhar, 3);
    let dezena = suffix_padded(&centena, 2);

    let grupo = if row.grupo == 0 {
        grupos::grupo_da_dezena(&dezena)
    } else {
        row.grupo
    };
    let bicho = if row.bicho.is_empty() {
        grupos::bicho_do_grupo(grupo).unwrap_or_default().to_string()
    } else {
        row.bicho
    };

    Premio {
        posicao: row.posicao,
        milhar,
        centena,
        dezena,
        bicho,
        grupo,
    }
}

/// Last `width` characters of `value`, left-padded with '0' when shorter.
fn suffix_padded(value: &str, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() >= width {
        chars[chars.len() - width..].iter().collect()
    } else {
        format!("{value:0>width$}")
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn parse_digits(text: &str) -> Option<u32> {
    DIGITS_RE.find(text).and_then(|m| m.as_str().parse().ok())
}
