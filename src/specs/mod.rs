// src/specs/mod.rs
//! # Page "specs"
//!
//! Each spec knows how to read one kind of page and nothing else:
//! it takes an HTML string and returns plain records. No networking,
//! no printing, no report formatting. That keeps them testable offline
//! against saved markup.
//!
//! ```text
//! scrape::fetch_list_items          → specs::index::parse_headings
//! scrape::fetch_and_process_tables  → specs::citations::parse_citation_tables
//! ```
//!
//! - `index` - heading links from the CMC "thematic indexes" page. The list
//!   widget is found by its page-builder `data-id`; each `<ul>` inside it
//!   contributes its first item if that item is linked.
//! - `citations` - five-row citation tables on a topic page, read by row
//!   position with the value in the second cell. Cell markup is kept
//!   verbatim (`<i>`, `<a>`, entities) rather than flattened to text.
pub mod citations;
pub mod index;
