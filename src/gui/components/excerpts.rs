// src/gui/components/excerpts.rs
//
// Close-reading aid: one collapsible panel per visible location listing every
// excerpt with its source file.

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Context explorer");

    let Some(view) = app.view.as_ref() else { return };
    let shown: Vec<&str> = view.locations().collect();
    ui.label(RichText::new(format!("Showing: {}", shown.join(", "))).weak());
    ui.add_space(4.0);

    for location in shown {
        let records: Vec<_> = view.excerpts_for(location).collect();
        if records.is_empty() { continue; }

        egui::CollapsingHeader::new(format!("📖 {location} ({} excerpts)", records.len()))
            .id_salt(("excerpts", location))
            .default_open(false)
            .show(ui, |ui| {
                for r in records {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("[{}]", r.file_name)).strong());
                        ui.label(RichText::new(format!("«{}»", r.alias)).weak());
                        ui.label(&r.excerpt);
                    });
                    ui.separator();
                }
            });
    }
}
