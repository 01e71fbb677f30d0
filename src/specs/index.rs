// src/specs/index.rs
//! Heading list on the thematic-index page.
//!
//! Shape we rely on:
//! ```html
//! <div data-id="5f33992">
//!   <ul><li><a href="https://…/bach/">Bach, Johann Sebastian</a></li> …</ul>
//!   <ul><li><a href="https://…/beethoven/">Beethoven, Ludwig van</a></li> …</ul>
//! </div>
//! ```
//! Only the first `<li>` of each `<ul>` is read, and only its first `<a>`.

use scraper::Html;

use crate::config::options::ContainerMarker;
use crate::core::html::{selector, stripped_text};
use crate::data::Heading;
use crate::error::ListError;

pub fn parse_headings(doc: &str, marker: &ContainerMarker) -> Result<Vec<Heading>, ListError> {
    let css = marker.css();
    let container_sel = selector(&css)?;
    let ul = selector("ul")?;
    let li = selector("li")?;
    let a = selector("a")?;

    let html = Html::parse_document(doc);
    let container = html
        .select(&container_sel)
        .next()
        .ok_or(ListError::ContainerMissing(css))?;

    let mut lists = container.select(&ul).peekable();
    if lists.peek().is_none() {
        return Err(ListError::NoSubLists);
    }

    let mut out = Vec::new();
    for list in lists {
        let Some(item) = list.select(&li).next() else { continue };
        // First anchor only; a later linked anchor does not rescue the item
        let Some(href) = item
            .select(&a)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            logd!("skipping unlinked list item: {}", stripped_text(item));
            continue;
        };
        out.push(Heading::new(stripped_text(item), href));
    }

    if out.is_empty() {
        return Err(ListError::NothingLinked);
    }
    Ok(out)
}
