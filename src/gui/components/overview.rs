// src/gui/components/overview.rs
//
// Overview tab: frequency table on the left, bar chart on the right.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Frequency overview");
    ui.add_space(4.0);

    ui.columns(2, |cols| {
        cols[0].label(egui::RichText::new("Frequency table").strong());
        super::freq_table::draw(&mut cols[0], app);

        cols[1].label(egui::RichText::new("Occurrences by location").strong());
        super::bar_chart::draw(&mut cols[1], app);
    });
}
