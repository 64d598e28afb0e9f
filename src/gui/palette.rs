// src/gui/palette.rs
//
// ColorBrewer "Reds" sequential scale, shared by the bar chart and the map.

use eframe::egui::Color32;

const REDS: [(u8, u8, u8); 9] = [
    (0xff, 0xf5, 0xf0),
    (0xfe, 0xe0, 0xd2),
    (0xfc, 0xbb, 0xa1),
    (0xfc, 0x92, 0x72),
    (0xfb, 0x6a, 0x4a),
    (0xef, 0x3b, 0x2c),
    (0xcb, 0x18, 0x1d),
    (0xa5, 0x0f, 0x15),
    (0x67, 0x00, 0x0d),
];

/// Colour at `t` in `[0, 1]` (clamped), linearly interpolated between stops.
pub fn reds(t: f32) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let pos = t * (REDS.len() - 1) as f32;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(REDS.len() - 1);
    let f = pos - lo as f32;
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f).round() as u8;
    let (a, b) = (REDS[lo], REDS[hi]);
    Color32::from_rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Colour of `count` on a scale spanning `[min, max]`. A flat range maps to
/// the top of the scale.
pub fn count_color(count: u64, (min, max): (u64, u64)) -> Color32 {
    if max <= min { return reds(1.0); }
    reds((count.saturating_sub(min)) as f32 / (max - min) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_of_the_scale() {
        assert_eq!(reds(0.0), Color32::from_rgb(0xff, 0xf5, 0xf0));
        assert_eq!(reds(1.0), Color32::from_rgb(0x67, 0x00, 0x0d));
        assert_eq!(reds(7.0), reds(1.0));
        assert_eq!(reds(0.5), Color32::from_rgb(0xfb, 0x6a, 0x4a));
    }

    #[test]
    fn counts_map_onto_range() {
        assert_eq!(count_color(10, (10, 50)), reds(0.0));
        assert_eq!(count_color(50, (10, 50)), reds(1.0));
        assert_eq!(count_color(3, (3, 3)), reds(1.0));
    }
}
