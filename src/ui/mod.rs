mod notice;
mod screens;
mod tile;
mod ui_config;
mod ui_text;
mod wallpaper;
mod wobble;

pub(crate) use notice::render_notice;
pub(crate) use screens::{DetailAction, GridAction, render_detail, render_grid};
pub(crate) use tile::{add_tile, seed_tile};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
pub(crate) use wallpaper::Wallpaper;
pub(crate) use wobble::Wobble;
