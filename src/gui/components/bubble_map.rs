// src/gui/components/bubble_map.rs
//
// Bubble map: each visible location with coordinates is a circle whose area
// and colour follow its count. Web-Mercator around the configured centre,
// a 5° graticule instead of tiles. Locations without coordinates are listed
// under the map rather than drawn.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::config::consts::{BUBBLE_SIZE_MAX, MAP_CENTER_LAT, MAP_CENTER_LON, MAP_HEIGHT, MAP_ZOOM};
use crate::data::LocationTotal;
use crate::geo::{self, LatLon, WebMercator};
use crate::gui::{app::App, palette};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Spatial distribution");
    ui.label(egui::RichText::new("Bubble size and colour show how often each place occurs in the texts.").weak());
    ui.add_space(4.0);

    let Some(view) = app.view.as_ref() else { return };
    let range = view.count_range();

    let size = Vec2::new(ui.available_width(), MAP_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let proj = WebMercator::new(LatLon { lat: MAP_CENTER_LAT, lon: MAP_CENTER_LON }, MAP_ZOOM);
    let to_screen = |p: LatLon| -> Pos2 {
        let (dx, dy) = proj.project(p);
        rect.center() + Vec2::new(dx as f32, dy as f32)
    };

    painter.rect_filled(rect, 0.0, ui.visuals().extreme_bg_color);
    draw_graticule(&painter, rect, &to_screen, ui.visuals().weak_text_color());

    // largest first, so small bubbles stay visible on top
    let mut bubbles: Vec<(Pos2, f32, &LocationTotal)> = view.totals.iter()
        .filter_map(|t| {
            let at = t.coords?;
            let radius = geo::bubble_radius(t.count, range.1, BUBBLE_SIZE_MAX);
            (radius > 0.0).then(|| (to_screen(at), radius, t))
        })
        .collect();
    bubbles.sort_by(|a, b| b.1.total_cmp(&a.1));

    let text_color = ui.visuals().text_color();
    let mut hovered: Option<String> = None;
    for (center, radius, r) in &bubbles {
        let fill = palette::count_color(r.count, range).gamma_multiply(0.85);
        painter.circle(*center, *radius, fill, Stroke::new(1.0, Color32::from_rgb(0x67, 0x00, 0x0d)));
        painter.text(*center + Vec2::new(radius + 4.0, 0.0), Align2::LEFT_CENTER, &r.location, FontId::proportional(13.0), text_color);

        if response.hover_pos().is_some_and(|p| p.distance(*center) <= radius.max(6.0)) {
            hovered = Some(format!("{}\n出现次数: {}", r.location, r.count));
        }
    }

    draw_legend(&painter, rect, range, text_color);

    if let Some(text) = hovered {
        response.on_hover_text_at_pointer(text);
    }

    let unmapped = view.unmapped();
    if !unmapped.is_empty() {
        ui.label(egui::RichText::new(format!("No coordinates for: {}", unmapped.join(", "))).weak());
    }
}

fn draw_graticule(painter: &egui::Painter, rect: Rect, to_screen: &dyn Fn(LatLon) -> Pos2, color: Color32) {
    let stroke = Stroke::new(0.5, color.gamma_multiply(0.5));
    let font = FontId::proportional(10.0);

    for lon in (70..=170).step_by(5) {
        let lon = lon as f64;
        let a = to_screen(LatLon { lat: 0.0, lon });
        let b = to_screen(LatLon { lat: 60.0, lon });
        painter.line_segment([a, b], stroke);
        if a.x > rect.left() && a.x < rect.right() {
            painter.text(Pos2::new(a.x + 2.0, rect.bottom() - 2.0), Align2::LEFT_BOTTOM, format!("{lon}°E"), font.clone(), color);
        }
    }
    for lat in (0..=60).step_by(5) {
        let lat = lat as f64;
        let a = to_screen(LatLon { lat, lon: 70.0 });
        let b = to_screen(LatLon { lat, lon: 170.0 });
        painter.line_segment([a, b], stroke);
        if a.y > rect.top() && a.y < rect.bottom() {
            painter.text(Pos2::new(rect.left() + 2.0, a.y - 2.0), Align2::LEFT_BOTTOM, format!("{lat}°N"), font.clone(), color);
        }
    }
}

fn draw_legend(painter: &egui::Painter, rect: Rect, (min, max): (u64, u64), text_color: Color32) {
    const STEPS: usize = 24;
    let w = 12.0;
    let h = 140.0;
    let top_right = Pos2::new(rect.right() - 48.0, rect.top() + 16.0);
    let step_h = h / STEPS as f32;

    for i in 0..STEPS {
        // top of the strip is the high end
        let t = 1.0 - i as f32 / (STEPS - 1) as f32;
        let cell = Rect::from_min_size(
            Pos2::new(top_right.x, top_right.y + i as f32 * step_h),
            Vec2::new(w, step_h + 0.5),
        );
        painter.rect_filled(cell, 0.0, palette::reds(t));
    }
    let font = FontId::proportional(11.0);
    painter.text(Pos2::new(top_right.x + w + 4.0, top_right.y), Align2::LEFT_TOP, max.to_string(), font.clone(), text_color);
    painter.text(Pos2::new(top_right.x + w + 4.0, top_right.y + h), Align2::LEFT_BOTTOM, min.to_string(), font, text_color);
}
