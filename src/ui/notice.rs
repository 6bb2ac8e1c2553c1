//! Floating transient notices (the capacity warning, mainly).

use eframe::egui::{Align2, Area, Context, Id, Order, RichText, vec2};

use crate::app::Notice;
use crate::ui::UI_CONFIG;

pub(crate) fn render_notice(ctx: &Context, notice: &Notice) {
    Area::new(Id::new("notice_overlay"))
        .anchor(Align2::CENTER_TOP, vec2(0.0, 24.0))
        .order(Order::Foreground)
        .show(ctx, |ui| {
            UI_CONFIG.notice_frame().show(ui, |ui| {
                ui.label(
                    RichText::new(notice.text)
                        .color(UI_CONFIG.colors.notice_text)
                        .strong(),
                );
            });
        });
}
