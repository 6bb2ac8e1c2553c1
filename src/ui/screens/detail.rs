//! The detail editor: title and note body for one seed, with the settings
//! window (icon + colors) hanging off it.

use {
    crate::{
        app::EditorState,
        config::ICON_CATALOG,
        models::Rgba,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Align, Align2, CentralPanel, Context, Layout, RichText, ScrollArea, TextEdit, TextStyle,
        TopBottomPanel, Ui, Vec2, Window,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailAction {
    /// Leave the editor; the draft gets committed on the way out.
    Back,
    /// The settings window was dismissed; commit icon and colors.
    SettingsClosed,
}

pub(crate) fn render_detail(ctx: &Context, editor: &mut EditorState) -> Option<DetailAction> {
    let mut action = None;

    TopBottomPanel::top("detail_top")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(UI_TEXT.back).clicked() {
                    action = Some(DetailAction::Back);
                }
                let title = if editor.app_name.is_empty() {
                    UI_TEXT.new_seed_title
                } else {
                    editor.app_name.as_str()
                };
                ui.label(
                    RichText::new(title)
                        .color(UI_CONFIG.colors.heading)
                        .strong(),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(UI_TEXT.settings_gear).clicked() {
                        editor.show_settings = true;
                    }
                });
            });
        });

    CentralPanel::default().show(ctx, |ui| {
        ui.add(
            TextEdit::singleline(&mut editor.app_name)
                .hint_text(UI_TEXT.app_name_hint)
                .font(TextStyle::Heading)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);
        let body = ui.add_sized(
            ui.available_size(),
            TextEdit::multiline(&mut editor.content),
        );
        // The note grabs focus once on entry, like a notepad should.
        if !editor.focused {
            body.request_focus();
            editor.focused = true;
        }
    });

    if editor.show_settings && render_settings(ctx, editor) {
        editor.show_settings = false;
        action = Some(DetailAction::SettingsClosed);
    }

    action
}

/// Returns true once the window has been dismissed, via Done or its close
/// button.
fn render_settings(ctx: &Context, editor: &mut EditorState) -> bool {
    let mut done = false;
    let mut open = true;

    Window::new(UI_TEXT.settings_title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(UI_TEXT.colors_section)
                    .color(UI_CONFIG.colors.subsection_heading)
                    .strong(),
            );
            color_row(ui, UI_TEXT.foreground_label, &mut editor.foreground_color);
            color_row(ui, UI_TEXT.background_label, &mut editor.background_color);

            ui.separator();
            ui.label(
                RichText::new(UI_TEXT.icon_section)
                    .color(UI_CONFIG.colors.subsection_heading)
                    .strong(),
            );
            ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                for entry in ICON_CATALOG {
                    let selected = editor.system_icon_name == entry.name;
                    let row = if selected {
                        format!("{}  {}  ✔", entry.glyph, entry.name)
                    } else {
                        format!("{}  {}", entry.glyph, entry.name)
                    };
                    if ui.selectable_label(selected, row).clicked() {
                        editor.system_icon_name = entry.name.to_string();
                    }
                }
            });

            ui.separator();
            if ui.button(UI_TEXT.done).clicked() {
                done = true;
            }
        });

    done || !open
}

fn color_row(ui: &mut Ui, label: &str, value: &mut Rgba) {
    ui.horizontal(|ui| {
        let mut rgba = value.to_array();
        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
            *value = Rgba::from_array(rgba);
        }
        ui.label(label);
    });
}
