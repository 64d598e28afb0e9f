// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    aliases::AliasTable,
    config::options::ScanOptions,
    progress::Progress,
    scan::{self, Document, ScanTables},
    store,
    tables::Workbook,
};

/// Summary of what a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub documents_found: usize,
    pub documents_scanned: usize,
    pub failed: Vec<(String, String)>,
    pub total_matches: u64,
    pub files_written: Vec<PathBuf>,
    pub workbook: Workbook,
}

/// File names in `dir` ending with `suffix`, sorted for a deterministic run.
/// A missing directory is an error; `scan_dir` reports it and scans nothing.
pub fn list_documents(dir: &Path, suffix: &str) -> Result<Vec<String>, Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("Input directory not found: {}", dir.display()).into());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(suffix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Read one document as UTF-8, with `\r\n` and lone `\r` line endings
/// turned into `\n` before any matching.
pub fn read_document(dir: &Path, name: &str) -> Result<Document, Box<dyn Error>> {
    let bytes = fs::read(dir.join(name))?;
    let text = String::from_utf8(bytes)?;
    Ok(Document::new(name, normalize_newlines(text)))
}

pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') { return text; }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scan every document under `opts.input_dir` and return the tables,
/// without touching disk for output.
pub fn scan_dir(
    opts: &ScanOptions,
    table: &AliasTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> RunSummary {
    let names = match list_documents(&opts.input_dir, &opts.suffix()) {
        Ok(v) => v,
        Err(e) => {
            loge!("Scan: {}", e);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error: {}", e));
            }
            Vec::new()
        }
    };

    logf!("Scan: {} document(s) in {}", names.len(), opts.input_dir.display());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
    }

    let mut tables = ScanTables::default();
    let mut failed = Vec::new();
    let mut scanned = 0;
    let mut total_matches = 0;

    for name in &names {
        let doc = match read_document(&opts.input_dir, name) {
            Ok(d) => d,
            Err(e) => {
                loge!("Scan: read error {}: {}", name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(name, &e.to_string());
                }
                failed.push((name.clone(), e.to_string()));
                continue;
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.item_started(name);
        }
        let hits = scan::scan_document(&doc, table, &mut tables);
        logd!("Scan: {} → {} match(es)", name, hits);
        total_matches += hits;
        scanned += 1;
    }

    RunSummary {
        documents_found: names.len(),
        documents_scanned: scanned,
        failed,
        total_matches,
        files_written: Vec::new(),
        workbook: scan::into_workbook(tables),
    }
}

/// Top-level scanner run: scan, then overwrite the workbook at `opts.out_dir`.
pub fn run(
    opts: &ScanOptions,
    table: &AliasTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut summary = scan_dir(opts, table, progress.as_deref_mut());

    summary.files_written = store::save_workbook(&opts.out_dir, &summary.workbook)?;
    logf!(
        "Scan: wrote {} (documents={}, failed={}, matches={})",
        opts.out_dir.display(), summary.documents_scanned, summary.failed.len(), summary.total_matches
    );

    if let Some(p) = progress.as_deref_mut() {
        p.finish(&opts.out_dir);
    }
    Ok(summary)
}
