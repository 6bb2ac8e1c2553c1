use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub side_panel: Color32,
    /// Destructive actions: delete badge, delete button.
    pub danger: Color32,
    pub notice_fill: Color32,
    pub notice_text: Color32,
    pub tile_label: Color32,
    pub tile_label_shadow: Color32,
    pub add_plate: Color32,
    pub add_glyph: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        subsection_heading: Color32::LIGHT_GRAY,
        side_panel: Color32::from_rgb(25, 25, 25),
        danger: Color32::from_rgb(220, 50, 47),
        notice_fill: Color32::from_rgb(120, 32, 32),
        notice_text: Color32::WHITE,
        tile_label: Color32::WHITE,
        tile_label_shadow: Color32::from_black_alpha(200),
        add_plate: Color32::from_rgba_premultiplied(178, 178, 178, 178),
        add_glyph: Color32::BLACK,
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the floating notice pill
    pub fn notice_frame(&self) -> Frame {
        Frame {
            fill: self.colors.notice_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
