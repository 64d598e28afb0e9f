// src/gui/actions/scan.rs
use std::path::PathBuf;

use crate::{
    aliases::AliasTable,
    gui::{app::App, progress::GuiProgress},
    runner,
};

/// Run the scanner on the UI thread, writing into the workbook the
/// dashboard is showing, then reload it.
pub fn scan(app: &mut App) {
    let mut opts = app.state.options.scan.clone();
    let input = app.input_dir_text.trim();
    if !input.is_empty() {
        opts.input_dir = PathBuf::from(input);
    }
    opts.out_dir = app.workbook_dir();
    app.state.options.scan = opts.clone();

    let table = match &opts.aliases_file {
        Some(p) => match AliasTable::load(p) {
            Ok(t) => t,
            Err(e) => {
                loge!("Scan: {}", e);
                app.status(format!("Error: {e}"));
                return;
            }
        },
        None => AliasTable::default(),
    };

    logf!("Scan: Begin input={} out={}", opts.input_dir.display(), opts.out_dir.display());
    let mut prog = GuiProgress::new();

    // → This is where the scan happens ←
    match runner::run(&opts, &table, Some(&mut prog)) {
        Ok(summary) => {
            logf!("Scan: OK documents={} matches={}", summary.documents_scanned, summary.total_matches);
            app.refresh(true);
            app.status(prog.into_status());
        }
        Err(e) => {
            loge!("Scan: Error {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
