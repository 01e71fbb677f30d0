// src/report.rs
use std::fmt;

use crate::config::consts::REPORT_HEADERS;

pub const SEP: char = '\t';

/* ---------------- Writing ---------------- */

/// One delimited line, newline-terminated. Cells are written verbatim:
/// no quoting, and tabs or newlines inside a cell are left alone.
pub fn to_line<S: AsRef<str>>(row: &[S], sep: char) -> String {
    let mut line = s!();
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { line.push(sep); }
        line.push_str(cell.as_ref());
    }
    line.push('\n');
    line
}

/* ---------------- Accumulator ---------------- */

/// The whole TSV report: header line, then blocks in the order they were pushed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    buf: String,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self { buf: to_line(&REPORT_HEADERS[..], SEP) }
    }

    /// Append a block as-is (data lines or an error line).
    pub fn push_block(&mut self, block: &str) {
        self.buf.push_str(block);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Lines after the header.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.buf.lines().skip(1)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
