// src/config/options.rs
use super::consts::*;

/// Element that wraps the heading lists on the index page,
/// matched as `<tag attr="value">`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerMarker {
    pub tag: String,
    pub attr: String,
    pub value: String,
}

impl Default for ContainerMarker {
    fn default() -> Self {
        Self {
            tag: s!(CONTAINER_TAG),
            attr: s!(CONTAINER_ATTR),
            value: s!(CONTAINER_ID),
        }
    }
}

impl ContainerMarker {
    /// CSS form, e.g. `div[data-id="5f33992"]`.
    pub fn css(&self) -> String {
        join!(&self.tag, "[", &self.attr, "=\"", &self.value, "\"]")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub index_url: String,
    pub container: ContainerMarker,
    /// Minimum rows for a table to count as a citation table.
    pub citation_rows: usize,
    /// Which `<td>` of each row holds the value.
    pub value_cell: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            index_url: s!(INDEX_URL),
            container: ContainerMarker::default(),
            citation_rows: CITATION_ROWS,
            value_cell: VALUE_CELL,
        }
    }
}

impl ScrapeOptions {
    /// Same conventions, different index page (fixtures, mirrors).
    pub fn with_index_url(url: &str) -> Self {
        Self { index_url: s!(url), ..Self::default() }
    }
}
