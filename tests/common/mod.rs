// tests/common/mod.rs
//
// Offline fetcher and progress recorder shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use thematic_scrape::core::Fetch;
use thematic_scrape::error::{Result, ScrapeError};
use thematic_scrape::progress::Progress;

pub const INDEX: &str = "http://fixture.test/index";

/// URL → body, or URL → simulated status. Unknown URLs answer 404.
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, std::result::Result<String, u16>>,
    pub calls: RefCell<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }
}

impl Fetch for FixtureFetcher {
    fn get(&self, url: &str) -> Result<String> {
        self.calls.borrow_mut().push(url.to_string());
        match self.pages.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(ScrapeError::Status { status: *status, url: url.to_string() }),
            None => Err(ScrapeError::Status { status: 404, url: url.to_string() }),
        }
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub total: Option<usize>,
    pub done: Vec<usize>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, seq: usize) {
        self.done.push(seq);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

/// Index page with one `<ul>` per (text, href); `None` href → unlinked item.
pub fn index_page(items: &[(&str, Option<&str>)]) -> String {
    let mut lists = String::new();
    for (text, href) in items {
        match href {
            Some(h) => lists.push_str(&format!(r#"<ul><li><a href="{h}">{text}</a></li></ul>"#)),
            None => lists.push_str(&format!("<ul><li>{text}</li></ul>")),
        }
    }
    format!(
        r#"<html><body>
            <nav><ul><li><a href="/menu">Menu</a></li></ul></nav>
            <div class="elementor-widget" data-id="5f33992">{lists}</div>
        </body></html>"#
    )
}

/// A citation table with `rows` (label, value) rows.
pub fn citation_table(rows: &[(&str, &str)]) -> String {
    let mut s = String::from("<table><tbody>");
    for (label, value) in rows {
        s.push_str(&format!("<tr><td>{label}</td><td>{value}</td></tr>"));
    }
    s.push_str("</tbody></table>");
    s
}

pub fn five_row_table(code: &str, citation: &str) -> String {
    citation_table(&[
        ("Code", code),
        ("Citation", citation),
        ("Abbreviation", "Abbr"),
        ("Access point use", "Use in access points"),
        ("Notes", "None"),
    ])
}

pub fn topic_page(tables: &[String]) -> String {
    format!("<html><body><h1>Topic</h1>{}</body></html>", tables.concat())
}
