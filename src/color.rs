use palette::{Hsl, IntoColor, Srgb};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Hue of the first series; a steel blue close to the usual plotting default.
const BASE_HUE: f32 = 205.0;

/// Hue step between consecutive series (golden angle, keeps neighbours apart).
const HUE_STEP: f32 = 137.5;

/// Plain sRGB triple, kept free of GUI types so chart specs stay comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colour for the `i`-th series of a chart.
pub fn series_color(i: usize) -> Rgb {
    let hue = (BASE_HUE + i as f32 * HUE_STEP) % 360.0;
    let hsl = Hsl::new(hue, 0.55, 0.42);
    let rgb: Srgb = hsl.into_color();
    Rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_series_is_blue() {
        let Rgb(r, g, b) = series_color(0);
        assert!(b > r && b > g, "expected a blue hue, got ({r}, {g}, {b})");
    }

    #[test]
    fn test_series_colors_differ() {
        assert_ne!(series_color(0), series_color(1));
        assert_eq!(series_color(3), series_color(3));
    }
}
