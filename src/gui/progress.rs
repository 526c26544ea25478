// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

/// Writes scrape progress into the status line.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(|p| p.into_inner()) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, _animal_id: &str, name: &str) {
        self.done += 1;
        self.set_status(format!("Fetched {} ({}/{})", name, self.done, self.total));
    }
    fn item_failed(&mut self, _animal_id: &str, name: &str) {
        self.done += 1;
        self.failed += 1;
        self.set_status(format!("No photo for {} ({}/{})", name, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Scrape complete"));
        } else {
            self.set_status(format!("Scrape complete ({}/{}, {} failed)", self.done, self.total, self.failed));
        }
    }
}
