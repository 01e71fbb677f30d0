// src/core/html.rs
//
// Small query helpers over `scraper`'s parsed tree.

use scraper::{ElementRef, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css: s!(css),
        message: e.to_string(),
    })
}

/// Visible text with every text node trimmed, empty nodes dropped,
/// and the rest glued together without a separator.
/// `<li><a>Foo</a> (Bar)</li>` → `Foo(Bar)`
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Serialized children of `el`, markup kept as-is.
pub fn inner_markup(el: ElementRef<'_>) -> String {
    el.inner_html()
}

/// Markup of the `n`th cell (0-based) of `row`; empty when the row is short.
pub fn nth_cell_markup(row: ElementRef<'_>, cell: &Selector, n: usize) -> String {
    row.select(cell)
        .nth(n)
        .map(inner_markup)
        .unwrap_or_default()
}
