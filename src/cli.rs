// src/cli.rs
use crate::{
    config::ScrapeOptions,
    core::HttpFetcher,
    error::Result,
    progress::{Progress, StdoutProgress},
    scrape,
};

/// Scrape the live index with the built-in settings and print the report.
/// Takes no arguments; fetch failures end up inside the report, not here.
pub fn run() -> Result<()> {
    let fetcher = HttpFetcher::new()?;
    let opts = ScrapeOptions::default();
    let progress: &mut dyn Progress = &mut StdoutProgress;

    let report = scrape::collect_report(&fetcher, &opts, Some(progress));

    println!("{report}");
    println!("Processing complete");
    Ok(())
}
