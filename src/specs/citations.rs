// src/specs/citations.rs
//! Citation tables on a thematic-index topic page.
//!
//! Each citation is a small two-column table:
//! ```text
//! row 0  Code              | BWV
//! row 1  Citation          | Schmieder, W. <i>Thematisch-systematisches Verzeichnis…</i>
//! row 2  Abbreviation      | Schmieder
//! row 3  Access point use  | …
//! row 4  Notes             | …
//! ```
//! Tables are numbered over *every* `<table>` on the page, so a skipped
//! short table still consumes its number.

use scraper::Html;

use crate::core::html::{nth_cell_markup, selector};
use crate::error::Result;

/// Field values of one qualifying table, as raw cell markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CitationTable {
    /// 1-based position among all tables on the page.
    pub index: usize,
    pub code: String,
    pub citation: String,
    pub abbreviation: String,
    pub access_point_use: String,
    pub notes: String,
}

/// `min_rows`: shorter tables are skipped. `value_cell`: 0-based cell holding the value.
pub fn parse_citation_tables(doc: &str, min_rows: usize, value_cell: usize) -> Result<Vec<CitationTable>> {
    let table_sel = selector("table")?;
    let tr = selector("tr")?;
    let td = selector("td")?;

    let html = Html::parse_document(doc);
    let mut out = Vec::new();

    for (idx, table) in html.select(&table_sel).enumerate() {
        let rows: Vec<_> = table.select(&tr).collect();
        if rows.len() < min_rows {
            logd!("table {}: {} rows, skipped", idx + 1, rows.len());
            continue;
        }

        let field = |i: usize| {
            rows.get(i)
                .map(|row| nth_cell_markup(*row, &td, value_cell))
                .unwrap_or_default()
        };

        out.push(CitationTable {
            index: idx + 1,
            code: field(0),
            citation: field(1),
            abbreviation: field(2),
            access_point_use: field(3),
            notes: field(4),
        });
    }

    Ok(out)
}
