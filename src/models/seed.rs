//! App Seed Entity
//!
//! One grid entry: an icon tile with a short note behind it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{DEFAULT_ICON, NAME_DISPLAY_CHARS};
use crate::models::Rgba;

/// A single customizable grid entry.
///
/// Field names are renamed to camelCase on disk; the seeds document predates
/// this crate, so the serialized shape is load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSeed {
    /// Unique identifier, generated at creation and never reused.
    pub id: Uuid,
    /// Key into the icon catalog.
    pub system_icon_name: String,
    /// Display title. May be empty.
    pub app_name: String,
    /// Free-form note body.
    pub content: String,
    pub foreground_color: Rgba,
    pub background_color: Rgba,
}

impl AppSeed {
    /// A fresh seed: star icon, white on black, nothing written yet.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            system_icon_name: DEFAULT_ICON.to_string(),
            app_name: String::new(),
            content: String::new(),
            foreground_color: Rgba::WHITE,
            background_color: Rgba::BLACK,
        }
    }

    /// Title as the tile shows it: cut at `NAME_DISPLAY_CHARS` with an
    /// ellipsis. Empty stays empty; the placeholder is the UI's business.
    pub fn short_name(&self) -> String {
        if self.app_name.chars().count() > NAME_DISPLAY_CHARS {
            let cut: String = self.app_name.chars().take(NAME_DISPLAY_CHARS).collect();
            format!("{cut}...")
        } else {
            self.app_name.clone()
        }
    }
}

impl Default for AppSeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_seed_has_defaults() {
        let seed = AppSeed::new();
        assert_eq!(seed.system_icon_name, "star");
        assert!(seed.app_name.is_empty());
        assert!(seed.content.is_empty());
        assert_eq!(seed.foreground_color, Rgba::WHITE);
        assert_eq!(seed.background_color, Rgba::BLACK);
    }

    #[test]
    fn new_seeds_get_distinct_ids() {
        assert_ne!(AppSeed::new().id, AppSeed::new().id);
    }

    #[test]
    fn short_name_cuts_long_titles() {
        let mut seed = AppSeed::new();
        seed.app_name = "A remarkably long app title".to_string();
        assert_eq!(seed.short_name(), "A remarkably...");

        seed.app_name = "Notes".to_string();
        assert_eq!(seed.short_name(), "Notes");
    }

    #[test]
    fn serializes_with_the_original_field_names() {
        let seed = AppSeed::new();
        let json = serde_json::to_string(&seed).unwrap();
        for field in [
            "\"id\"",
            "\"systemIconName\"",
            "\"appName\"",
            "\"content\"",
            "\"foregroundColor\"",
            "\"backgroundColor\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
        // id must be the hyphenated UUID string form
        assert!(json.contains(&seed.id.to_string()));
    }

    #[test]
    fn deserializes_from_the_original_document_shape() {
        let raw = r#"{
            "id": "7f2b6a54-27b8-4f0e-9f3e-0f6a2f3c9d11",
            "systemIconName": "heart",
            "appName": "A",
            "content": "hello",
            "foregroundColor": {"red": 1, "green": 1, "blue": 1, "alpha": 1},
            "backgroundColor": {"red": 0, "green": 0, "blue": 0, "alpha": 1}
        }"#;
        let seed: AppSeed = serde_json::from_str(raw).unwrap();
        assert_eq!(seed.system_icon_name, "heart");
        assert_eq!(seed.app_name, "A");
        assert_eq!(seed.content, "hello");
    }
}
