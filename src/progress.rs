// src/progress.rs
use crate::core::sanitize::capitalize;

/// Progress reporting for a run. The CLI prints; tests record.
pub trait Progress {
    /// Called at the start with the number of pages to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page was written.
    fn item_done(&mut self, _name: &str, _updated_cells: usize) {}

    /// A page produced nothing after all retries and was skipped.
    fn item_failed(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain stdout lines, one per event.
#[derive(Default)]
pub struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Beginning Loading Information...\n");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str, updated_cells: usize) {
        self.done += 1;
        println!("{} cells of {} updated.", updated_cells, capitalize(name));
    }
    fn item_failed(&mut self, name: &str) {
        self.failed += 1;
        println!("Failed to update {}. Skipping.", capitalize(name));
    }
    fn finish(&mut self) {
        println!(
            "\nDone: {} updated, {} skipped, {} total.",
            self.done, self.failed, self.total
        );
    }
}
