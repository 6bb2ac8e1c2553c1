//! The color quadruple stored in seed files.

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// sRGB color with explicit `red` / `green` / `blue` / `alpha` components,
/// each a float in `[0, 1]`. This is exactly the shape the seeds document
/// stores, so the fields here are the on-disk schema.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 };
    pub const BLACK: Rgba = Rgba { red: 0.0, green: 0.0, blue: 0.0, alpha: 1.0 };

    /// Components are clamped into `[0, 1]`.
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn to_color32(self) -> Color32 {
        // `as u8` saturates, so even a hand-edited out-of-range file renders
        // rather than wrapping.
        Color32::from_rgba_unmultiplied(
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
            (self.alpha * 255.0).round() as u8,
        )
    }

    pub fn from_color32(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Unmultiplied array form, the shape egui's stock color picker edits.
    pub fn to_array(self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn from_array([red, green, blue, alpha]: [f32; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_clamp_to_unit_range() {
        let c = Rgba::new(-0.5, 1.5, 0.25, 2.0);
        assert_eq!(c, Rgba { red: 0.0, green: 1.0, blue: 0.25, alpha: 1.0 });
    }

    #[test]
    fn color32_round_trip() {
        let c = Rgba::new(0.2, 0.4, 0.6, 1.0);
        let back = Rgba::from_color32(c.to_color32());
        assert!((back.red - c.red).abs() < 0.01);
        assert!((back.green - c.green).abs() < 0.01);
        assert!((back.blue - c.blue).abs() < 0.01);
        assert_eq!(back.alpha, 1.0);
    }

    #[test]
    fn white_and_black_map_to_color32_extremes() {
        assert_eq!(Rgba::WHITE.to_color32(), Color32::WHITE);
        assert_eq!(Rgba::BLACK.to_color32(), Color32::BLACK);
    }

    #[test]
    fn serializes_as_named_components() {
        let json = serde_json::to_value(Rgba::WHITE).unwrap();
        assert_eq!(json["red"], 1.0);
        assert_eq!(json["green"], 1.0);
        assert_eq!(json["blue"], 1.0);
        assert_eq!(json["alpha"], 1.0);
    }
}
