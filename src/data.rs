// src/data.rs
//
// Row-level records passed between the specs and the report.

use crate::specs::citations::CitationTable;

/// One topic link from the index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    pub url: String,
}

impl Heading {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), url: url.into() }
    }
}

/// One qualifying table, tagged with the heading it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitationRecord {
    pub heading_number: usize,
    pub heading: String,
    pub url: String,
    pub citation_number: usize,
    pub code: String,
    pub citation: String,
    pub abbreviation: String,
    pub access_point_use: String,
    pub notes: String,
}

impl CitationRecord {
    pub fn new(heading_number: usize, heading: &str, url: &str, table: CitationTable) -> Self {
        Self {
            heading_number,
            heading: s!(heading),
            url: s!(url),
            citation_number: table.index,
            code: table.code,
            citation: table.citation,
            abbreviation: table.abbreviation,
            access_point_use: table.access_point_use,
            notes: table.notes,
        }
    }

    /// Column order matches `REPORT_HEADERS`.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.heading_number.to_string(),
            self.heading.clone(),
            self.url.clone(),
            self.citation_number.to_string(),
            self.code.clone(),
            self.citation.clone(),
            self.abbreviation.clone(),
            self.access_point_use.clone(),
            self.notes.clone(),
        ]
    }
}
