// src/gui/progress.rs
use crate::progress::Progress;

/// Collects a scan's progress into one status line for the top bar.
/// Scans run on the UI thread, so there is nothing to share across threads.
pub struct GuiProgress {
    status: String,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new() -> Self {
        Self { status: s!("Scanning..."), done: 0, failed: 0, total: 0 }
    }

    pub fn into_status(self) -> String {
        self.status
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.status = s!(msg);
    }
    fn item_started(&mut self, _name: &str) {
        self.done += 1;
    }
    fn item_failed(&mut self, name: &str, err: &str) {
        self.failed += 1;
        logw!("UI: scan skipped {}: {}", name, err);
    }
    fn finish(&mut self, out: &std::path::Path) {
        let mut text = format!("Scanned {}/{} document(s) → {}", self.done, self.total, out.display());
        if self.failed > 0 {
            text.push_str(&format!(" ({} unreadable)", self.failed));
        }
        if self.total == 0 && !self.status.starts_with("Scanning") {
            // keep the missing-directory message visible
            text = format!("{} · {}", self.status, text);
        }
        self.status = text;
    }
}
