// src/cache.rs
//! WorkbookCache: memoized workbook loads for the dashboard.
//!
//! The dashboard re-renders every frame, so it must not re-parse the sheets
//! each time. A loaded workbook is kept together with the path it came from
//! and a `Stamp` of the three sheet files (modified time + size). The entry is
//! reused while both match, and dropped as soon as either changes: another
//! path, a rewritten sheet, or a deleted artifact.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::SystemTime,
};

use crate::store;
use crate::tables::Workbook;

/// Modification state of the sheet files; `None` for a missing sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamp(Vec<Option<(SystemTime, u64)>>);

impl Stamp {
    pub fn of(dir: &Path) -> Self {
        Stamp(
            store::sheet_paths(dir)
                .iter()
                .map(|p| {
                    let meta = fs::metadata(p).ok()?;
                    Some((meta.modified().ok()?, meta.len()))
                })
                .collect(),
        )
    }
}

struct Entry {
    dir: PathBuf,
    stamp: Stamp,
    book: Option<Arc<Workbook>>,
}

#[derive(Default)]
pub struct WorkbookCache {
    entry: Option<Entry>,
    loads: usize,
}

impl WorkbookCache {
    pub fn new() -> Self { Self::default() }

    /// Workbook at `dir`, loading only when path or stamp changed.
    /// `Ok(None)` means the artifact is missing (that result is cached too).
    pub fn get(&mut self, dir: &Path) -> Result<Option<Arc<Workbook>>, Box<dyn Error>> {
        let stamp = Stamp::of(dir);

        if let Some(e) = &self.entry {
            if e.dir == dir && e.stamp == stamp {
                return Ok(e.book.clone());
            }
        }

        // Drop a stale entry first so a failed reload never serves old data.
        self.entry = None;
        self.loads += 1;
        let book = store::load_workbook(dir)?.map(Arc::new);
        logd!("Cache: load #{} for {}", self.loads, dir.display());

        self.entry = Some(Entry { dir: dir.to_path_buf(), stamp, book: book.clone() });
        Ok(book)
    }

    /// Forget the cached entry; the next `get` reloads.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times the sheets were actually read from disk.
    pub fn loads(&self) -> usize { self.loads }
}
