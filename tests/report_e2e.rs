// tests/report_e2e.rs
//
// Driver end to end against fixture pages.
mod common;

use common::{five_row_table, index_page, topic_page, FixtureFetcher, RecordingProgress, INDEX};
use thematic_scrape::config::ScrapeOptions;
use thematic_scrape::progress::Progress;
use thematic_scrape::scrape::collect_report;

const HEADER: &str =
    "Heading Number\tHeading\tURL\tCitation Number\tCode\tCitation\tAbbreviation\tAccess Point Use\tNotes";

#[test]
fn two_headings_one_with_tables() {
    let url1 = "http://fixture.test/a/";
    let url2 = "http://fixture.test/b/";
    let fetcher = FixtureFetcher::new()
        .page(INDEX, &index_page(&[("A", Some(url1)), ("B", Some(url2))]))
        .page(url1, &topic_page(&[five_row_table("C1", "Cit")]))
        .page(url2, &topic_page(&[]));
    let mut rec = RecordingProgress::default();

    let report = collect_report(
        &fetcher,
        &ScrapeOptions::with_index_url(INDEX),
        Some(&mut rec as &mut dyn Progress),
    );

    let lines: Vec<_> = report.as_str().lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    let f: Vec<_> = lines[1].split('\t').collect();
    assert_eq!(&f[..5], &["1", "A", url1, "1", "C1"]);

    assert_eq!(
        rec.lines,
        vec![
            "Counting the number of headings...".to_string(),
            "Counted 2 headings".to_string(),
            format!("Processing URL: {url1}"),
            format!("Processing URL: {url2}"),
        ]
    );
    assert_eq!(rec.total, Some(2));
    assert_eq!(rec.done, vec![1, 2]);
    assert!(rec.finished);
    assert_eq!(*fetcher.calls.borrow(), vec![INDEX.to_string(), url1.to_string(), url2.to_string()]);
}

#[test]
fn failed_topic_page_leaves_error_line_in_report() {
    let url1 = "http://fixture.test/a/";
    let url2 = "http://fixture.test/b/";
    let fetcher = FixtureFetcher::new()
        .page(INDEX, &index_page(&[("A", Some(url1)), ("B", Some(url2))]))
        .status(url1, 404)
        .page(url2, &topic_page(&[five_row_table("C2", "Cit")]));

    let report = collect_report(&fetcher, &ScrapeOptions::with_index_url(INDEX), None);

    let body: Vec<_> = report.body_lines().collect();
    assert_eq!(body.len(), 2);
    assert!(body[0].starts_with("Error requesting the web page: "));
    assert!(body[1].starts_with("2\tB\t"));
}

#[test]
fn unreachable_index_still_yields_header() {
    let fetcher = FixtureFetcher::new().status(INDEX, 502);
    let mut rec = RecordingProgress::default();

    let report = collect_report(
        &fetcher,
        &ScrapeOptions::with_index_url(INDEX),
        Some(&mut rec as &mut dyn Progress),
    );

    assert_eq!(report.as_str(), format!("{HEADER}\n"));
    assert_eq!(rec.lines.len(), 3);
    assert!(rec.lines[1].starts_with("Error requesting the web page: "));
    assert_eq!(rec.lines[2], "Counted 0 headings");
    assert_eq!(rec.total, Some(0));
    assert!(rec.done.is_empty());
}
