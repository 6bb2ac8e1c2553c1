//! The home grid: every seed as a tile, a trailing add button, and the
//! delete confirmation dialog while one is pending.

use {
    crate::{
        config::{GRID_COLUMNS, TILE_SPACING},
        models::SeedCollection,
        ui::{UI_CONFIG, UI_TEXT, Wallpaper, add_tile, seed_tile},
    },
    eframe::egui::{
        Align2, Button, CentralPanel, Color32, Context, Frame, Grid, Key, RichText, ScrollArea,
        Vec2, Window,
    },
    uuid::Uuid,
};

/// What the user asked for this frame, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GridAction {
    Open(Uuid),
    Add,
    ToggleEdit,
    ExitEdit,
    RequestDelete(Uuid),
    ConfirmDelete,
    CancelDelete,
}

pub(crate) fn render_grid(
    ctx: &Context,
    seeds: &SeedCollection,
    edit_mode: bool,
    wobble_angle: f32,
    wallpaper: &Wallpaper,
    confirming_delete: bool,
) -> Option<GridAction> {
    let mut action = None;

    CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| {
        wallpaper.paint(ui.painter(), ui.max_rect());

        ui.add_space(8.0);
        if edit_mode {
            ui.horizontal(|ui| {
                ui.add_space(12.0);
                if ui.button(UI_TEXT.done).clicked() {
                    action = Some(GridAction::ExitEdit);
                }
            });
        }

        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                Grid::new("seed_grid")
                    .spacing([TILE_SPACING, TILE_SPACING])
                    .show(ui, |ui| {
                        for (i, seed) in seeds.iter().enumerate() {
                            // Neighbours sway in opposite directions.
                            let sway = if i % 2 == 0 { wobble_angle } else { -wobble_angle };
                            let tile = seed_tile(ui, seed, edit_mode, sway);
                            if tile.open {
                                action = Some(GridAction::Open(seed.id));
                            }
                            if tile.toggle_edit {
                                action = Some(GridAction::ToggleEdit);
                            }
                            if tile.delete {
                                action = Some(GridAction::RequestDelete(seed.id));
                            }
                            if (i + 1) % GRID_COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                        if add_tile(ui).clicked() {
                            action = Some(GridAction::Add);
                        }
                    });
            });
        });
    });

    if confirming_delete {
        Window::new(UI_TEXT.delete_title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(UI_TEXT.delete_message);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let delete = Button::new(
                        RichText::new(UI_TEXT.delete_confirm).color(Color32::WHITE),
                    )
                    .fill(UI_CONFIG.colors.danger);
                    if ui.add(delete).clicked() {
                        action = Some(GridAction::ConfirmDelete);
                    }
                    if ui.button(UI_TEXT.delete_cancel).clicked() {
                        action = Some(GridAction::CancelDelete);
                    }
                });
            });
    }

    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        if confirming_delete {
            action = Some(GridAction::CancelDelete);
        } else if edit_mode {
            action = Some(GridAction::ExitEdit);
        }
    }

    action
}
