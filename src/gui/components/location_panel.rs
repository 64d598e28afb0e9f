// src/gui/components/location_panel.rs
//
// Renders the left location filter and applies selection changes directly to
// `app`. Handles ctrl/shift range behavior and status text.

use eframe::egui;
use crate::data::Selection;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Locations");

    // Apply current selection → rebuild view, set status.
    let apply_selection_change = |app: &mut App| {
        app.rebuild_view();
        app.set_selection_message();
    };

    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            app.state.gui.selected_locations = app.locations.clone();
            apply_selection_change(app);
        }
        if ui.button("None").clicked() {
            app.state.gui.selected_locations.clear();
            apply_selection_change(app);
        }
    });

    let sel = Selection { picked: &app.state.gui.selected_locations, all: &app.locations };
    let summary = if sel.is_none() {
        s!("none selected")
    } else if sel.is_all() {
        s!("all selected")
    } else {
        format!("{} of {} selected", sel.picked.len(), sel.all.len())
    };
    ui.label(egui::RichText::new(summary).small().weak());

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("locations_panel_scroll")
        .show(ui, |ui| {
            let mut changed = false;

            for idx in 0..app.locations.len() {
                let name = app.locations[idx].clone();
                let is_selected = app.state.gui.selected_locations.contains(&name);
                let count = app.view.as_ref()
                    .and_then(|v| v.workbook().frequency.iter().find(|r| r.location == name))
                    .map(|r| r.count);
                let label = match count {
                    Some(c) => format!("{name}  ({c})"),
                    None => name.clone(),
                };
                let resp = ui.selectable_label(is_selected, label);

                if resp.clicked() {
                    let (ctrl, shift) = ui.input(|i| (i.modifiers.ctrl || i.modifiers.command, i.modifiers.shift));
                    let gui = &mut app.state.gui;
                    let sel = &mut gui.selected_locations;

                    if shift {
                        if let Some(last) = gui.last_clicked {
                            let (lo, hi) = if last <= idx { (last, idx) } else { (idx, last) };
                            if !ctrl { sel.clear(); }
                            for loc in &app.locations[lo..=hi] {
                                if !sel.contains(loc) { sel.push(loc.clone()); }
                            }
                        } else {
                            // No anchor: behave like single click
                            sel.clear();
                            sel.push(name.clone());
                        }
                    } else {
                        // plain and ctrl clicks both toggle, like a checklist
                        if is_selected { sel.retain(|x| x != &name); } else { sel.push(name.clone()); }
                    }
                    gui.last_clicked = Some(idx);
                    changed = true;
                }
            }

            if changed {
                // keep sheet order so views list locations consistently
                let order = &app.locations;
                app.state.gui.selected_locations
                    .sort_by_key(|l| order.iter().position(|o| o == l).unwrap_or(usize::MAX));
                apply_selection_change(app);
                logf!(
                    "UI: Selection changed ({} locations): {:?}",
                    app.state.gui.selected_locations.len(),
                    &app.state.gui.selected_locations
                );
            }
        });
}
