// src/store.rs
//
// The persisted artifact: a workbook directory holding one CSV file per
// sheet (频率统计.csv, 原文摘录.csv, 详细明细.csv). Every save rewrites
// all three sheets.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::*;
use crate::csv::{parse_rows, sheet_to_string};
use crate::tables::{
    self, Workbook, DETAIL_HEADERS, EXCERPT_HEADERS, FREQUENCY_HEADERS,
};

pub const SHEETS: [&str; 3] = [SHEET_FREQUENCY, SHEET_EXCERPTS, SHEET_DETAIL];

pub fn sheet_path(dir: &Path, sheet: &str) -> PathBuf {
    dir.join(format!("{sheet}.{SHEET_EXT}"))
}

pub fn sheet_paths(dir: &Path) -> [PathBuf; 3] {
    SHEETS.map(|s| sheet_path(dir, s))
}

/// The artifact exists when every sheet file does.
pub fn workbook_exists(dir: &Path) -> bool {
    sheet_paths(dir).iter().all(|p| p.is_file())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Write all three sheets, overwriting any previous run. Returns the paths written.
pub fn save_workbook(dir: &Path, book: &Workbook) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(dir)?;

    let frequency: Vec<Vec<String>> = book.frequency.iter().map(|r| r.to_row()).collect();
    let excerpts: Vec<Vec<String>> = book.excerpts.iter().map(|r| r.to_row()).collect();
    let detail: Vec<Vec<String>> = book.detail.iter().map(|r| r.to_row()).collect();

    let sheets: [(&str, &[&str], &[Vec<String>]); 3] = [
        (SHEET_FREQUENCY, &FREQUENCY_HEADERS, &frequency),
        (SHEET_EXCERPTS, &EXCERPT_HEADERS, &excerpts),
        (SHEET_DETAIL, &DETAIL_HEADERS, &detail),
    ];

    let mut written = Vec::with_capacity(sheets.len());
    for (name, headers, rows) in sheets {
        let path = sheet_path(dir, name);
        fs::write(&path, sheet_to_string(headers, rows, SHEET_SEP))
            .map_err(|e| format!("Cannot write {}: {}", path.display(), e))?;
        logd!("Store: wrote {} ({} rows)", path.display(), rows.len());
        written.push(path);
    }
    Ok(written)
}

fn read_sheet(dir: &Path, sheet: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let path = sheet_path(dir, sheet);
    let text = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    Ok(parse_rows(&text, SHEET_SEP))
}

/// Load all three sheets. `Ok(None)` when the artifact is missing.
pub fn load_workbook(dir: &Path) -> Result<Option<Workbook>, Box<dyn Error>> {
    if !workbook_exists(dir) {
        logd!("Store: no workbook at {}", dir.display());
        return Ok(None);
    }
    let book = Workbook {
        frequency: tables::frequency_from_rows(&read_sheet(dir, SHEET_FREQUENCY)?)?,
        excerpts: tables::excerpts_from_rows(&read_sheet(dir, SHEET_EXCERPTS)?)?,
        detail: tables::detail_from_rows(&read_sheet(dir, SHEET_DETAIL)?)?,
    };
    logf!(
        "Store: loaded {} (frequency={}, excerpts={}, detail={})",
        dir.display(), book.frequency.len(), book.excerpts.len(), book.detail.len()
    );
    Ok(Some(book))
}
