// src/gui/components/bar_chart.rs
//
// Horizontal bar chart, one bar per visible location. Bars are laid out in
// ascending count order from the bottom, so the largest sits on top; colour
// follows the Reds scale and each bar carries its count.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::config::consts::CHART_HEIGHT;
use crate::gui::{app::App, palette};

const LABEL_W: f32 = 64.0;
const VALUE_W: f32 = 48.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view.as_ref() else { return };
    let bars = view.bar_order();
    let range = view.count_range();

    let size = Vec2::new(ui.available_width(), CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    if bars.is_empty() {
        painter.text(rect.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(14.0), ui.visuals().weak_text_color());
        return;
    }

    let text_color = ui.visuals().text_color();
    let plot_w = (rect.width() - LABEL_W - VALUE_W).max(10.0);
    let slot = rect.height() / bars.len() as f32;
    let bar_h = (slot * 0.7).min(32.0);
    let max = range.1.max(1) as f32;

    // axis
    let axis_x = rect.left() + LABEL_W;
    painter.line_segment(
        [Pos2::new(axis_x, rect.top()), Pos2::new(axis_x, rect.bottom())],
        Stroke::new(1.0, ui.visuals().weak_text_color()),
    );

    let mut hovered: Option<String> = None;
    for (i, t) in bars.iter().enumerate() {
        let cy = rect.bottom() - slot * (i as f32 + 0.5);
        let w = plot_w * (t.count as f32 / max);
        let bar = Rect::from_min_size(Pos2::new(axis_x, cy - bar_h / 2.0), Vec2::new(w, bar_h));

        painter.rect_filled(bar, 2.0, palette::count_color(t.count, range));
        painter.rect_stroke(bar, 2.0, Stroke::new(0.5, ui.visuals().weak_text_color()), StrokeKind::Inside);
        painter.text(Pos2::new(axis_x - 6.0, cy), Align2::RIGHT_CENTER, &t.location, FontId::proportional(13.0), text_color);
        painter.text(Pos2::new(bar.right() + 6.0, cy), Align2::LEFT_CENTER, t.count.to_string(), FontId::proportional(12.0), text_color);

        let slot_rect = Rect::from_min_max(Pos2::new(rect.left(), cy - slot / 2.0), Pos2::new(rect.right(), cy + slot / 2.0));
        if response.hover_pos().is_some_and(|p| slot_rect.contains(p)) {
            hovered = Some(format!("{}: {}", t.location, t.count));
        }
    }

    if let Some(text) = hovered {
        response.on_hover_text_at_pointer(text);
    }
}
