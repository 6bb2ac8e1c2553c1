// src/app/state.rs

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::config::NOTICE_LIFETIME;
use crate::models::{AppSeed, Rgba, SeedPatch};
use crate::ui::UI_TEXT;

/// Which screen is on show. Detail carries the working copy of the seed
/// being edited; it is committed back through the collection on the way out.
#[derive(Debug, Default)]
pub(crate) enum Screen {
    #[default]
    Grid,
    Detail(EditorState),
}

/// The detail editor's draft. Mutated freely by the screen, merged into the
/// collection in one go when the user leaves or closes settings.
#[derive(Debug, Clone)]
pub(crate) struct EditorState {
    pub(crate) id: Uuid,
    pub(crate) app_name: String,
    pub(crate) content: String,
    pub(crate) system_icon_name: String,
    pub(crate) foreground_color: Rgba,
    pub(crate) background_color: Rgba,
    pub(crate) show_settings: bool,
    pub(crate) focused: bool,
}

impl EditorState {
    pub(crate) fn from_seed(seed: &AppSeed) -> Self {
        Self {
            id: seed.id,
            app_name: seed.app_name.clone(),
            content: seed.content.clone(),
            system_icon_name: seed.system_icon_name.clone(),
            foreground_color: seed.foreground_color,
            background_color: seed.background_color,
            show_settings: false,
            focused: false,
        }
    }

    /// Everything the editor can touch, as one merge.
    pub(crate) fn patch(&self) -> SeedPatch {
        SeedPatch {
            app_name: Some(self.app_name.clone()),
            content: Some(self.content.clone()),
            system_icon_name: Some(self.system_icon_name.clone()),
            foreground_color: Some(self.foreground_color),
            background_color: Some(self.background_color),
        }
    }
}

/// Transient top-of-screen message.
#[derive(Debug, Clone)]
pub(crate) struct Notice {
    pub(crate) text: &'static str,
    raised_at: Instant,
}

impl Notice {
    /// The distinct "grid is full" failure signal.
    pub(crate) fn capacity(now: Instant) -> Self {
        Self {
            text: UI_TEXT.capacity_notice,
            raised_at: now,
        }
    }

    pub(crate) fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= NOTICE_LIFETIME
    }

    /// Time left on screen, for scheduling the expiry repaint.
    pub(crate) fn remaining(&self, now: Instant) -> Duration {
        NOTICE_LIFETIME.saturating_sub(now.duration_since(self.raised_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_its_lifetime() {
        let now = Instant::now();
        let notice = Notice::capacity(now);
        assert!(!notice.expired(now));
        assert!(notice.expired(now + NOTICE_LIFETIME));
        assert_eq!(notice.remaining(now + NOTICE_LIFETIME * 2), Duration::ZERO);
    }

    #[test]
    fn editor_patch_carries_every_field() {
        let seed = AppSeed::new();
        let mut editor = EditorState::from_seed(&seed);
        editor.app_name = "Renamed".to_string();

        let patch = editor.patch();
        assert_eq!(patch.app_name.as_deref(), Some("Renamed"));
        assert!(patch.content.is_some());
        assert!(patch.system_icon_name.is_some());
        assert!(patch.foreground_color.is_some());
        assert!(patch.background_color.is_some());
    }
}
