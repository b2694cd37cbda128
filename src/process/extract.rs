use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::process::raw_table::RawYearTable;

static TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table").expect("CSS selector for tables should be valid"));
static TR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("CSS selector for rows should be valid"));
static TH: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("CSS selector for header cells should be valid"));
static CELL: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, td").expect("CSS selector for cells should be valid"));

/// Locate the first table on the page and flatten it into a [`RawYearTable`].
///
/// The header is the first row rendered with `<th>` cells, or failing that
/// the first row of the table. Ragged data rows are padded with empty
/// strings or truncated so every row matches the header width.
pub fn extract_cap_table(html: &str, year: u16) -> Option<RawYearTable> {
    let doc = Html::parse_document(html);

    let Some(table) = doc.select(&TABLE).next() else {
        warn!("year {year}: no table found on page");
        return None;
    };

    let rows: Vec<ElementRef> = table.select(&TR).collect();
    let header_idx = rows
        .iter()
        .position(|tr| tr.select(&TH).next().is_some())
        .unwrap_or(0);
    let Some(header_tr) = rows.get(header_idx) else {
        warn!("year {year}: table has no rows");
        return None;
    };

    let headers = cell_texts(*header_tr);
    if headers.is_empty() {
        warn!("year {year}: table header row has no cells");
        return None;
    }

    let width = headers.len();
    let data = rows[header_idx + 1..]
        .iter()
        .map(|tr| {
            let mut cells = cell_texts(*tr);
            cells.resize(width, String::new());
            cells
        })
        .collect();

    Some(RawYearTable {
        year,
        headers,
        rows: data,
    })
}

fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL)
        .map(|cell| cell.text().collect::<String>())
        .collect()
}
