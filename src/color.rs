use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart colors
// ---------------------------------------------------------------------------

/// Non-leading bars are drawn in this light gray so the accent stands out.
pub const NEUTRAL: Color32 = Color32::from_rgb(0xd3, 0xd3, 0xd3);

/// Build an accent color from a hue in degrees.
pub fn accent(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.90, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Blue accent used for the sales and high-rating charts.
pub fn sales_accent() -> Color32 {
    accent(219.0)
}

/// Orange accent used for the revenue and low-rating charts.
pub fn warning_accent() -> Color32 {
    accent(33.0)
}

/// Bar fills for a ranked chart: the leading bar gets the accent, the rest
/// are neutral gray.
pub fn ranked_fills(n: usize, accent: Color32) -> Vec<Color32> {
    (0..n)
        .map(|i| if i == 0 { accent } else { NEUTRAL })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_fills_highlight_only_the_first_bar() {
        let fills = ranked_fills(4, sales_accent());
        assert_eq!(fills.len(), 4);
        assert_eq!(fills[0], sales_accent());
        assert!(fills[1..].iter().all(|c| *c == NEUTRAL));
    }

    #[test]
    fn ranked_fills_empty() {
        assert!(ranked_fills(0, sales_accent()).is_empty());
    }
}
