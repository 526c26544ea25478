// src/progress.rs
/// Progress reporting for the scrape loop.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of animals.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One animal handled (photo saved, or none to fetch).
    fn item_done(&mut self, _animal_id: &str, _name: &str) {}

    /// One animal whose photo download failed; the batch continues.
    fn item_failed(&mut self, _animal_id: &str, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
