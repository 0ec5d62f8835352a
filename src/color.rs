use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Bar colours
// ---------------------------------------------------------------------------

/// Saturation and lightness shared by every generated colour.
const SATURATION: f32 = 0.65;
const LIGHTNESS: f32 = 0.50;

/// Generates `n` visually distinct colours using evenly spaced hues,
/// one per feature row.
pub fn feature_palette(n: usize) -> Vec<Color32> {
    (0..n).map(|i| hue_color(i as f32 / n as f32 * 360.0)).collect()
}

fn hue_color(hue: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, SATURATION, LIGHTNESS).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}
