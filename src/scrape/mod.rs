// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_report;
pub use scrape::fetch_and_process_tables;
pub use scrape::fetch_list_items;
