// src/gui/components/top_bar.rs
//
// Workbook path (Open), input folder (Scan) and the status line.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Workbook:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.path_text).desired_width(320.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Open").clicked() || enter {
            actions::open(app);
        }

        ui.separator();

        ui.label("Texts:");
        ui.add(egui::TextEdit::singleline(&mut app.input_dir_text).desired_width(220.0));
        if ui.button("Scan")
            .on_hover_text("Count place names in the folder and rewrite the workbook")
            .clicked()
        {
            actions::scan(app);
        }
    });
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&app.status).weak());
    });
    ui.add_space(2.0);
}
