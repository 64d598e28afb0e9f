// src/gui/components/detail_table.rs
//
// Per-document counts for the visible locations (the 详细明细 sheet).

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{COL_COUNT, COL_FILE, COL_LOCATION};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Per-document counts");

    let Some(view) = app.view.as_ref() else { return };
    let rows: Vec<_> = view.detail().collect();
    let nonzero = rows.iter().filter(|r| r.count > 0).count();
    ui.label(RichText::new(format!("{} row(s), {} with matches", rows.len(), nonzero)).weak());
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .id_salt("detail_table")
        .striped(true)
        .vscroll(false)
        .column(Column::initial(220.0).at_least(80.0).resizable(true).clip(true))
        .column(Column::initial(120.0).at_least(60.0).resizable(true))
        .column(Column::remainder().at_least(60.0))
        .header(24.0, |mut header| {
            for h in [COL_FILE, COL_LOCATION, COL_COUNT] {
                header.col(|ui| { ui.label(RichText::new(h).strong()); });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let r = rows[row.index()];
                row.col(|ui| { ui.label(&r.file_name); });
                row.col(|ui| { ui.label(&r.location); });
                row.col(|ui| {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let text = RichText::new(r.count.to_string());
                        ui.label(if r.count == 0 { text.weak() } else { text });
                    });
                });
            });
        });
}
