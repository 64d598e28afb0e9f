// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::Arc,
    time::{Duration, Instant},
};

use eframe::egui;

use crate::{
    cache::WorkbookCache,
    config::{
        consts::RELOAD_CHECK_MS,
        state::{AppState, ViewTab},
    },
    data::{self, SelectionView},
    tables::Workbook,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Place Frequency Dashboard",
        options,
        Box::new(|cc| {
            super::fonts::install_cjk_font(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // memoized workbook + what the current filter shows of it
    pub cache: WorkbookCache,
    pub book: Option<Arc<Workbook>>,
    pub load_error: Option<String>,
    pub locations: Vec<String>,
    pub view: Option<SelectionView>,

    // top bar text fields (applied on Open / Scan)
    pub input_dir_text: String,

    pub status: String,
    last_check: Option<Instant>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.gui.path_text = state.options.dashboard.workbook_dir.to_string_lossy().into_owned();
        let input_dir_text = state.options.scan.input_dir.to_string_lossy().into_owned();

        let mut app = Self {
            state,
            cache: WorkbookCache::new(),
            book: None,
            load_error: None,
            locations: Vec::new(),
            view: None,
            input_dir_text,
            status: s!("Idle"),
            last_check: None,
        };
        app.refresh(true);
        logf!("Init: workbook={} locations={}", app.workbook_dir().display(), app.locations.len());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn workbook_dir(&self) -> PathBuf { self.state.options.dashboard.workbook_dir.clone() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) { self.status = msg.into(); }

    /// Ask the cache for the workbook; adopt it when it is a different one.
    /// Unforced calls are throttled to one stat of the sheets per interval.
    pub fn refresh(&mut self, force: bool) {
        let due = self.last_check
            .map(|t| t.elapsed() >= Duration::from_millis(RELOAD_CHECK_MS))
            .unwrap_or(true);
        if !force && !due { return; }
        self.last_check = Some(Instant::now());

        let dir = self.workbook_dir();
        match self.cache.get(&dir) {
            Ok(Some(book)) => {
                let same = self.book.as_ref().is_some_and(|b| Arc::ptr_eq(b, &book));
                if !same { self.adopt(book); }
                self.load_error = None;
            }
            Ok(None) => {
                let msg = format!(
                    "Workbook not found: {}. Run the scanner first, or open another path.",
                    dir.display()
                );
                if self.load_error.as_ref() != Some(&msg) { loge!("Load: workbook missing at {}", dir.display()); }
                self.clear(msg);
            }
            Err(e) => {
                let msg = format!("Cannot load workbook: {e}");
                // one log line per distinct failure, not per throttled retry
                if self.load_error.as_ref() != Some(&msg) { loge!("Load: {} ({})", e, dir.display()); }
                self.clear(msg);
            }
        }
    }

    fn adopt(&mut self, book: Arc<Workbook>) {
        let locations = data::all_locations(&book);
        if locations != self.locations {
            // new location set: default back to everything selected
            self.state.gui.selected_locations = locations.clone();
            self.state.gui.last_clicked = None;
            self.locations = locations;
        }
        logf!("Load: workbook adopted ({} locations, {} excerpts)", self.locations.len(), book.excerpts.len());
        self.book = Some(book);
        self.status(format!("Loaded {}", self.workbook_dir().display()));
        self.rebuild_view();
    }

    fn clear(&mut self, msg: String) {
        self.book = None;
        self.view = None;
        self.locations.clear();
        self.state.gui.selected_locations.clear();
        self.load_error = Some(msg);
    }

    /// Re-derive the filtered view after a selection or data change.
    pub fn rebuild_view(&mut self) {
        self.view = self.book.as_ref().map(|b| {
            SelectionView::build(Arc::clone(b), &self.state.gui.selected_locations)
        });
    }

    #[inline]
    pub fn set_selection_message(&mut self) {
        let n = self.state.gui.selected_locations.len();
        let msg = if n == 0 { s!("Selection: none") } else { format!("Selection: {} location(s)", n) };
        self.status(msg);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh(false);
        ctx.request_repaint_after(Duration::from_millis(RELOAD_CHECK_MS));

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            super::components::top_bar::draw(ui, self);
        });

        if let Some(err) = self.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.colored_label(ui.visuals().error_fg_color, err);
            });
            return;
        }

        egui::SidePanel::left("locations")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::location_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();

            let Some(view) = self.view.as_ref() else { return };
            if view.fell_back {
                ui.colored_label(ui.visuals().warn_fg_color, "Select at least one location. Showing all data.");
            }

            egui::ScrollArea::vertical()
                .id_salt("central_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.state.gui.current_tab {
                    ViewTab::Overview => super::components::overview::draw(ui, self),
                    ViewTab::Map => super::components::bubble_map::draw(ui, self),
                    ViewTab::Excerpts => super::components::excerpts::draw(ui, self),
                    ViewTab::Documents => super::components::detail_table::draw(ui, self),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{LOG_FILE, STORE_DIR};
    use crate::store;

    fn error_lines_for(dir: &std::path::Path) -> usize {
        let log = std::fs::read_to_string(std::path::Path::new(STORE_DIR).join(LOG_FILE)).unwrap_or_default();
        let needle = dir.display().to_string();
        log.lines().filter(|l| l.contains("[ERROR]") && l.contains(&needle)).count()
    }

    #[test]
    fn broken_workbook_is_logged_once_while_it_stays_broken() {
        let dir = std::env::temp_dir().join("placecount_app_broken_workbook");
        let _ = std::fs::remove_dir_all(&dir);
        store::save_workbook(&dir, &Workbook::default()).unwrap();
        std::fs::write(&store::sheet_paths(&dir)[0], "地点,出现次数\n南京,many\n").unwrap();

        let before = error_lines_for(&dir);
        let mut state = AppState::default();
        state.options.dashboard.workbook_dir = dir.clone();
        let mut app = App::new(state);
        assert!(app.load_error.as_deref().is_some_and(|e| e.contains("bad count")));

        app.refresh(true);
        app.refresh(true);
        assert!(app.load_error.is_some());
        assert!(app.view.is_none());
        assert_eq!(error_lines_for(&dir) - before, 1);
    }
}
