// src/scrape/scrape.rs
//
// Network-facing operations. Failures never escape: they become a status
// line plus an empty list (index) or an error line (topic page).

use crate::{
    config::{consts::{MSG_NO_LIST, MSG_REQUEST_FAILED}, ScrapeOptions},
    core::Fetch,
    data::{CitationRecord, Heading},
    progress::Progress,
    report::{to_line, Report, SEP},
    specs::{citations, index},
};

/// Headings listed on the index page, in document order.
/// Empty on any failure; the reason goes to `progress`.
pub fn fetch_list_items(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<Heading> {
    let doc = match fetcher.get(&opts.index_url) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("index page {}: {e}", opts.index_url);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("{MSG_REQUEST_FAILED}: {e}"));
            }
            return Vec::new();
        }
    };

    match index::parse_headings(&doc, &opts.container) {
        Ok(headings) => {
            logf!("index page: {} headings", headings.len());
            headings
        }
        Err(e) => {
            loge!("index page {}: {e}", opts.index_url);
            if let Some(p) = progress.as_deref_mut() {
                p.log(MSG_NO_LIST);
            }
            Vec::new()
        }
    }
}

/// TSV lines for every citation table on `url`, or a single error line.
/// A page without qualifying tables yields an empty string.
pub fn fetch_and_process_tables(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    url: &str,
    seq: usize,
    label: &str,
) -> String {
    let doc = match fetcher.get(url) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("heading {seq} ({url}): {e}");
            return format!("{MSG_REQUEST_FAILED}: {e}\n");
        }
    };

    let tables = match citations::parse_citation_tables(&doc, opts.citation_rows, opts.value_cell) {
        Ok(tables) => tables,
        Err(e) => {
            loge!("heading {seq} ({url}): {e}");
            return s!();
        }
    };
    logd!("heading {seq}: {} citation tables", tables.len());

    let mut out = s!();
    for table in tables {
        let record = CitationRecord::new(seq, label, url, table);
        out.push_str(&to_line(&record.to_row(), SEP));
    }
    out
}

/// List, then extract each heading in order, into one report.
pub fn collect_report(
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Report {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Counting the number of headings...");
    }
    let headings = fetch_list_items(
        fetcher,
        opts,
        progress.as_mut().map(|p| &mut **p as &mut dyn Progress),
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Counted {} headings", headings.len()));
        p.begin(headings.len());
    }

    let mut report = Report::new();
    for (seq, heading) in (1..).zip(&headings) {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing URL: {}", heading.url));
        }
        let block = fetch_and_process_tables(fetcher, opts, &heading.url, seq, &heading.text);
        report.push_block(&block);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(seq);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    report
}
