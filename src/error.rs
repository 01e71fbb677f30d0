// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Transport failure or non-2xx status from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-2xx status reported by a fetcher that is not backed by reqwest.
    #[error("HTTP status {status} for url ({url})")]
    Status { status: u16, url: String },

    #[error("invalid selector `{css}`: {message}")]
    Selector { css: String, message: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Why the index page produced no headings.
/// All three read the same to the operator.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("container `{0}` not found")]
    ContainerMissing(String),

    #[error("container holds no <ul>")]
    NoSubLists,

    #[error("no sub-list starts with a linked item")]
    NothingLinked,

    #[error(transparent)]
    Query(#[from] ScrapeError),
}
