// src/progress.rs
/// Lightweight progress reporting for the extraction pipeline.
/// Frontends implement this to surface status and guidance to users.
pub trait Progress {
    /// Called once the element snapshot is taken, with the number of matches.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one channel lands in the catalog.
    fn item_done(&mut self, _code: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// Prints every status line to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, code: &str) {
        log::debug!("Collected {code}");
    }
}
