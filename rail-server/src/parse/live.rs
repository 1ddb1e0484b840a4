//! Live station board pages (`/station-live/{code}`).

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::{LiveEntry, NO_TIME};

use super::error::ParseError;
use super::route::normalize_time;
use super::schema::board;

/// Message when the page has no board table.
pub const BOARD_PARSE_ERROR: &str = "parse error";

/// Parse a live board page from its HTML source.
pub fn parse_live_board_str(html: &str) -> Result<Vec<LiveEntry>, ParseError> {
    parse_live_board(&Html::parse_document(html))
}

/// Extract the board rows from a parsed page, in page order.
///
/// Rows are found by their [`board::NAME`] element inside the
/// [`board::CONTAINER`] table. A row whose neighbouring route line or time
/// cell is missing is skipped. A page without the table at all is a format
/// error; a table without rows is an empty board.
pub fn parse_live_board(document: &Html) -> Result<Vec<LiveEntry>, ParseError> {
    let container = selector(board::CONTAINER)?;
    let name = selector(board::NAME)?;

    let mut tables = document.select(&container).peekable();
    if tables.peek().is_none() {
        return Err(ParseError::format(BOARD_PARSE_ERROR));
    }

    let entries: Vec<LiveEntry> = tables
        .flat_map(|table| table.select(&name))
        .filter_map(live_entry)
        .collect();

    debug!(count = entries.len(), "parsed live board");
    Ok(entries)
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::format(format!("bad board selector {css}")))
}

fn live_entry(name: ElementRef<'_>) -> Option<LiveEntry> {
    let label = text_of(name);
    let (train_no, train_name) = split_chars(&label, board::TRAIN_NO_LEN);
    if train_no.chars().count() != board::TRAIN_NO_LEN
        || !train_no.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    // Route line is the element right after the name: "Origin → Destination"
    let route = next_element(name).filter(|e| e.value().name() == "div")?;
    let route = text_of(route);
    let (origin, destination) = route.split_once(board::ROUTE_SEPARATOR)?;

    // Time sits in the cell after the one holding the name: "HH:MM <detail>".
    // A cell without a leading clock ("Cancelled") is all detail.
    let cell = name
        .parent()
        .and_then(ElementRef::wrap)
        .filter(|e| e.value().name() == "td")?;
    let time_cell = next_element(cell).filter(|e| e.value().name() == "td")?;
    let timing = text_of(time_cell);
    if timing.is_empty() {
        return None;
    }
    let (clock, rest) = split_chars(&timing, board::TIME_LEN);
    let time_at = normalize_time(clock);
    let detail = if time_at == NO_TIME { timing.as_str() } else { rest };

    Some(LiveEntry {
        train_no: train_no.to_string(),
        train_name: train_name.trim().to_string(),
        source_stn_name: origin.trim().to_string(),
        dstn_stn_name: destination.trim().to_string(),
        time_at,
        detail: detail.trim().to_string(),
    })
}

fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Split after the first `n` characters (not bytes).
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}
