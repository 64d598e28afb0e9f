// src/gui/components/freq_table.rs
//
// Sortable location/count table. Click a header to sort by it; click again
// to flip direction.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{CHART_HEIGHT, COL_COUNT, COL_LOCATION};
use crate::config::state::SortKey;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view.as_ref() else { return };
    let sort = app.state.gui.table_sort;
    let rows: Vec<(String, u64)> = view
        .table_rows(sort)
        .into_iter()
        .map(|t| (t.location.clone(), t.count))
        .collect();

    let arrow = |key: SortKey| -> &'static str {
        if sort.key != key { "" } else if sort.descending { " ⏷" } else { " ⏶" }
    };
    let mut clicked: Option<SortKey> = None;

    TableBuilder::new(ui)
        .id_salt("freq_table")
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(CHART_HEIGHT)
        .column(Column::initial(140.0).at_least(60.0).resizable(true))
        .column(Column::remainder().at_least(60.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                let text = RichText::new(format!("{COL_LOCATION}{}", arrow(SortKey::Location))).strong();
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    clicked = Some(SortKey::Location);
                }
            });
            header.col(|ui| {
                let text = RichText::new(format!("{COL_COUNT}{}", arrow(SortKey::Count))).strong();
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    clicked = Some(SortKey::Count);
                }
            });
        })
        .body(|mut body| {
            for (location, count) in &rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| { ui.label(location); });
                    row.col(|ui| {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(count.to_string());
                        });
                    });
                });
            }
        });

    if let Some(key) = clicked {
        app.state.gui.table_sort.toggle(key);
        logd!("UI: Table sort → {:?}", app.state.gui.table_sort);
    }
}
