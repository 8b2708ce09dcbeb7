//! Cause-list table parsing.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::{cell_text, static_selector};
use crate::models::{CauseList, CauseListEntry};

const MIN_CAUSE_LIST_CELLS: usize = 4;

static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("tr"));
static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| static_selector("td"));

/// Parses every table row after the page's first (header) row into entries.
///
/// Rows with fewer than four cells are skipped; cells 0..3 map to serial
/// number, case number, parties and court. Text is trimmed but otherwise
/// taken as is, empty strings included.
pub fn parse_cause_list(html: &str, date: &str) -> CauseList {
    let document = Html::parse_document(html);

    let cases: Vec<CauseListEntry> = document
        .select(&ROW_SELECTOR)
        .skip(1)
        .filter_map(|row| {
            let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
            if cells.len() < MIN_CAUSE_LIST_CELLS {
                return None;
            }
            let text = |i: usize| cell_text(&cells[i]).trim().to_string();
            Some(CauseListEntry {
                serial_no: text(0),
                case_number: text(1),
                parties: text(2),
                court: text(3),
            })
        })
        .collect();

    log::debug!("Parsed {} cause list entries", cases.len());
    CauseList {
        date: date.to_string(),
        cases,
    }
}
