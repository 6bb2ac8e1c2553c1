use {
    eframe::{Frame, Storage, egui::{Context, Visuals}},
    std::{mem, time::Instant},
    uuid::Uuid,
};

use crate::{
    Cli,
    app::{EditorState, Notice, Screen},
    config::{DF, WOBBLE_PERIOD},
    data::{load_seeds, save_seeds, wipe_seeds},
    models::SeedCollection,
    ui::{
        DetailAction, GridAction, UI_CONFIG, Wallpaper, Wobble, render_detail, render_grid,
        render_notice,
    },
};

pub struct App {
    pub(crate) seeds: SeedCollection,
    screen: Screen,
    edit_mode: bool,
    wobble: Wobble,
    pending_delete: Option<Uuid>,
    notice: Option<Notice>,
    wallpaper: Wallpaper,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let seeds = if args.reset || DF.wipe_seeds_on_startup {
            if let Err(err) = wipe_seeds() {
                log::error!("Failed to wipe seeds file: {err}");
            }
            SeedCollection::new()
        } else {
            load_seeds()
        };
        log::info!("Loaded {} app seeds", seeds.len());

        Self {
            seeds,
            screen: Screen::Grid,
            edit_mode: false,
            wobble: Wobble::default(),
            pending_delete: None,
            notice: None,
            wallpaper: Wallpaper::random(),
        }
    }

    /// Whole-collection write after every mutation. Failure is logged and
    /// that is the end of it; the previous on-disk state is whatever the
    /// filesystem left behind.
    fn persist(&self) {
        if let Err(err) = save_seeds(&self.seeds) {
            log::error!("Failed to save app seeds: {err}");
        } else if DF.log_persistence {
            log::info!("Saved {} app seeds", self.seeds.len());
        }
    }

    /// The wobble clock starts and stops with the mode, never outlives it.
    fn set_edit_mode(&mut self, on: bool, now: Instant) {
        if self.edit_mode == on {
            return;
        }
        self.edit_mode = on;
        if on {
            self.wobble.start(now);
        } else {
            self.wobble.stop();
            self.pending_delete = None;
        }
        if DF.log_navigation {
            log::info!("Edit mode {}", if on { "on" } else { "off" });
        }
    }

    fn add_seed(&mut self, now: Instant) {
        match self.seeds.add() {
            Ok(id) => {
                if DF.log_mutations {
                    log::info!("New seed added: {id}");
                }
                self.persist();
            }
            Err(err) => {
                log::warn!("Add refused: {err}");
                self.notice = Some(Notice::capacity(now));
            }
        }
    }

    fn tick_grid(&mut self, ctx: &Context, now: Instant) -> Screen {
        let action = render_grid(
            ctx,
            &self.seeds,
            self.edit_mode,
            self.wobble.angle(),
            &self.wallpaper,
            self.pending_delete.is_some(),
        );

        match action {
            Some(GridAction::Open(id)) => {
                if let Some(seed) = self.seeds.get(id) {
                    if DF.log_navigation {
                        log::info!("Opening seed {id}");
                    }
                    return Screen::Detail(EditorState::from_seed(seed));
                }
            }
            Some(GridAction::Add) => self.add_seed(now),
            Some(GridAction::ToggleEdit) => self.set_edit_mode(!self.edit_mode, now),
            Some(GridAction::ExitEdit) => self.set_edit_mode(false, now),
            Some(GridAction::RequestDelete(id)) => self.pending_delete = Some(id),
            Some(GridAction::ConfirmDelete) => {
                if let Some(id) = self.pending_delete.take() {
                    if self.seeds.remove(id) {
                        if DF.log_mutations {
                            log::info!("Deleted seed {id}");
                        }
                        self.persist();
                    }
                }
            }
            Some(GridAction::CancelDelete) => self.pending_delete = None,
            None => {}
        }
        Screen::Grid
    }

    fn tick_detail(&mut self, ctx: &Context, mut editor: EditorState) -> Screen {
        match render_detail(ctx, &mut editor) {
            Some(DetailAction::Back) => {
                self.commit_editor(&editor);
                if DF.log_navigation {
                    log::info!("Back to grid");
                }
                Screen::Grid
            }
            Some(DetailAction::SettingsClosed) => {
                self.commit_editor(&editor);
                Screen::Detail(editor)
            }
            None => Screen::Detail(editor),
        }
    }

    fn commit_editor(&mut self, editor: &EditorState) {
        if self.seeds.update(editor.id, editor.patch()) {
            if DF.log_mutations {
                log::info!("Updated seed {}", editor.id);
            }
            self.persist();
        } else {
            log::warn!("Editor commit for unknown seed {}", editor.id);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let now = Instant::now();
        self.wobble.tick(now);
        if self.notice.as_ref().is_some_and(|n| n.expired(now)) {
            self.notice = None;
        }

        let current = mem::take(&mut self.screen);
        self.screen = match current {
            Screen::Grid => self.tick_grid(ctx, now),
            Screen::Detail(editor) => self.tick_detail(ctx, editor),
        };

        if let Some(notice) = &self.notice {
            render_notice(ctx, notice);
            ctx.request_repaint_after(notice.remaining(now));
        }
        if self.wobble.is_active() {
            ctx.request_repaint_after(WOBBLE_PERIOD);
        }
    }

    fn save(&mut self, _storage: &mut dyn Storage) {
        // Mutations save eagerly; this catches the shutdown path anyway.
        if let Err(err) = save_seeds(&self.seeds) {
            log::error!("Failed to save app seeds: {err}");
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
