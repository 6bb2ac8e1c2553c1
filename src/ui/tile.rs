//! The seed tile widget, hand-painted.
//!
//! A tile is a rounded colored plate with the icon glyph on it and the title
//! underneath. In edit mode the glyph sways and a minus badge appears in the
//! top-left corner.

use eframe::egui::{
    Color32, CornerRadius, FontId, Id, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2,
    epaint::TextShape,
};

use crate::config::{TILE_CORNER_RADIUS, TILE_ICON_SIZE, TILE_PADDING, icon_glyph};
use crate::models::AppSeed;
use crate::ui::{UI_CONFIG, UI_TEXT};

const LABEL_FONT_SIZE: f32 = 12.0;
const LABEL_GAP: f32 = 4.0;
const BADGE_RADIUS: f32 = 12.0;

pub(crate) struct TileResponse {
    /// Tap outside edit mode: open the detail editor.
    pub open: bool,
    /// Long press or secondary click: flip edit mode.
    pub toggle_edit: bool,
    /// Minus badge tapped: ask for delete confirmation.
    pub delete: bool,
}

fn plate_side() -> f32 {
    TILE_ICON_SIZE + 2.0 * TILE_PADDING
}

fn tile_size() -> Vec2 {
    Vec2::new(plate_side(), plate_side() + LABEL_GAP + LABEL_FONT_SIZE + 4.0)
}

pub(crate) fn seed_tile(ui: &mut Ui, seed: &AppSeed, edit_mode: bool, angle: f32) -> TileResponse {
    let (rect, response) = ui.allocate_exact_size(tile_size(), Sense::click());
    let painter = ui.painter();

    let plate = Rect::from_min_size(rect.min, Vec2::splat(plate_side()));
    painter.rect_filled(
        plate,
        CornerRadius::same(TILE_CORNER_RADIUS),
        seed.background_color.to_color32(),
    );

    // Icon glyph, swaying while edit mode is on.
    let fg = seed.foreground_color.to_color32();
    let glyph = icon_glyph(&seed.system_icon_name);
    let galley = painter.layout_no_wrap(
        glyph.to_string(),
        FontId::proportional(TILE_ICON_SIZE * 0.8),
        fg,
    );
    let glyph_pos = plate.center() - galley.size() / 2.0;
    painter.add(TextShape::new(glyph_pos, galley, fg).with_angle(angle));

    // Title, shadowed so it reads on any wallpaper.
    let label = if seed.app_name.is_empty() {
        UI_TEXT.untitled.to_string()
    } else {
        seed.short_name()
    };
    let label_font = FontId::proportional(LABEL_FONT_SIZE);
    let shadow = painter.layout_no_wrap(
        label.clone(),
        label_font.clone(),
        UI_CONFIG.colors.tile_label_shadow,
    );
    let text = painter.layout_no_wrap(label, label_font, UI_CONFIG.colors.tile_label);
    let label_pos = Pos2::new(
        rect.center().x - text.size().x / 2.0,
        plate.bottom() + LABEL_GAP,
    );
    painter.galley(
        label_pos + Vec2::new(1.0, 1.0),
        shadow,
        UI_CONFIG.colors.tile_label_shadow,
    );
    painter.galley(label_pos, text, UI_CONFIG.colors.tile_label);

    let mut delete = false;
    if edit_mode {
        let center = plate.left_top() + Vec2::splat(4.0);
        let badge_rect = Rect::from_center_size(center, Vec2::splat(BADGE_RADIUS * 2.0));
        let badge = ui.interact(badge_rect, Id::new(("seed_badge", seed.id)), Sense::click());
        let painter = ui.painter();
        painter.circle_filled(center, BADGE_RADIUS, Color32::WHITE);
        painter.circle_filled(center, BADGE_RADIUS - 2.0, UI_CONFIG.colors.danger);
        painter.line_segment(
            [center - Vec2::new(5.0, 0.0), center + Vec2::new(5.0, 0.0)],
            Stroke::new(2.0, Color32::WHITE),
        );
        delete = badge.clicked();
    }

    TileResponse {
        open: !edit_mode && !delete && response.clicked(),
        toggle_edit: response.long_touched() || response.secondary_clicked(),
        delete,
    }
}

/// The trailing "+" tile. Always shown; a full grid is refused upstream.
pub(crate) fn add_tile(ui: &mut Ui) -> Response {
    let (rect, response) = ui.allocate_exact_size(tile_size(), Sense::click());
    let painter = ui.painter();

    let plate = Rect::from_min_size(rect.min, Vec2::splat(plate_side()));
    painter.rect_filled(
        plate,
        CornerRadius::same(TILE_CORNER_RADIUS),
        UI_CONFIG.colors.add_plate,
    );

    let galley = painter.layout_no_wrap(
        "+".to_string(),
        FontId::proportional(TILE_ICON_SIZE * 0.66),
        UI_CONFIG.colors.add_glyph,
    );
    let pos = plate.center() - galley.size() / 2.0;
    painter.galley(pos, galley, UI_CONFIG.colors.add_glyph);

    response
}
