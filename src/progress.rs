// src/progress.rs
/// Lightweight progress reporting used by the scan run.
/// Frontends (CLI console, GUI status line) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of documents found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a document is about to be scanned.
    fn item_started(&mut self, _name: &str) {}

    /// Called when a document could not be read; the run continues.
    fn item_failed(&mut self, _name: &str, _err: &str) {}

    /// Called once at the end of a completed run.
    fn finish(&mut self, _out: &std::path::Path) {}
}

/// Collects every message; handy in tests and for GUI summaries.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub started: Vec<String>,
    pub failed: Vec<String>,
    pub total: Option<usize>,
    pub finished: Option<std::path::PathBuf>,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_started(&mut self, name: &str) { self.started.push(s!(name)); }
    fn item_failed(&mut self, name: &str, err: &str) {
        self.failed.push(s!(name));
        self.lines.push(format!("{name}: {err}"));
    }
    fn finish(&mut self, out: &std::path::Path) { self.finished = Some(out.to_path_buf()); }
}
