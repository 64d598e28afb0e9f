// src/gui/actions/open.rs
use std::path::PathBuf;

use crate::gui::app::App;

/// Point the dashboard at the workbook path typed in the top bar.
pub fn open(app: &mut App) {
    let text = app.state.gui.path_text.trim();
    if text.is_empty() {
        app.status("Enter a workbook directory first");
        return;
    }
    let dir = PathBuf::from(text);
    logf!("UI: Open {}", dir.display());

    app.state.options.dashboard.workbook_dir = dir;
    app.cache.invalidate();
    app.refresh(true);
}
