// src/progress.rs
/// Progress reporting for the scrape run.
/// The CLI prints to stdout; tests record.
pub trait Progress {
    /// Called once the heading count is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one heading's page has been processed (1-based).
    fn item_done(&mut self, _seq: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Status lines straight to stdout, interleaved with the report.
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}
