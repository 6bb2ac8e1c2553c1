//! The icon catalog.
//!
//! Seed files store icons by name, not by glyph, so renames here would
//! orphan saved seeds. Names stay stable; glyphs are whatever egui's bundled
//! emoji fonts can draw.

pub struct IconEntry {
    pub name: &'static str,
    pub glyph: &'static str,
}

/// Icon assigned to freshly added seeds.
pub const DEFAULT_ICON: &str = "star";

/// Drawn when a seed references a name the catalog no longer carries.
pub const FALLBACK_GLYPH: &str = "✱";

pub const ICON_CATALOG: &[IconEntry] = &[
    IconEntry { name: "airplane", glyph: "✈" },
    IconEntry { name: "ant", glyph: "🐜" },
    IconEntry { name: "bag", glyph: "👜" },
    IconEntry { name: "bell", glyph: "🔔" },
    IconEntry { name: "bicycle", glyph: "🚲" },
    IconEntry { name: "book", glyph: "📖" },
    IconEntry { name: "bookmark", glyph: "🔖" },
    IconEntry { name: "briefcase", glyph: "💼" },
    IconEntry { name: "bus", glyph: "🚌" },
    IconEntry { name: "calendar", glyph: "📅" },
    IconEntry { name: "camera", glyph: "📷" },
    IconEntry { name: "car", glyph: "🚗" },
    IconEntry { name: "cart", glyph: "🛒" },
    IconEntry { name: "chart.bar", glyph: "📊" },
    IconEntry { name: "checkmark", glyph: "✔" },
    IconEntry { name: "circle", glyph: "⭕" },
    IconEntry { name: "clock", glyph: "⏰" },
    IconEntry { name: "cloud", glyph: "☁" },
    IconEntry { name: "crown", glyph: "👑" },
    IconEntry { name: "cube", glyph: "📦" },
    IconEntry { name: "dollarsign.circle", glyph: "💰" },
    IconEntry { name: "envelope", glyph: "✉" },
    IconEntry { name: "eye", glyph: "👁" },
    IconEntry { name: "film", glyph: "🎬" },
    IconEntry { name: "flag", glyph: "🚩" },
    IconEntry { name: "flame", glyph: "🔥" },
    IconEntry { name: "folder", glyph: "📁" },
    IconEntry { name: "gift", glyph: "🎁" },
    IconEntry { name: "globe", glyph: "🌍" },
    IconEntry { name: "hammer", glyph: "🔨" },
    IconEntry { name: "hare", glyph: "🐇" },
    IconEntry { name: "headphones", glyph: "🎧" },
    IconEntry { name: "heart", glyph: "❤" },
    IconEntry { name: "hourglass", glyph: "⌛" },
    IconEntry { name: "house", glyph: "🏠" },
    IconEntry { name: "key", glyph: "🔑" },
    IconEntry { name: "ladybug", glyph: "🐞" },
    IconEntry { name: "leaf", glyph: "🍃" },
    IconEntry { name: "lightbulb", glyph: "💡" },
    IconEntry { name: "link", glyph: "🔗" },
    IconEntry { name: "lock", glyph: "🔒" },
    IconEntry { name: "magnifyingglass", glyph: "🔍" },
    IconEntry { name: "map", glyph: "🗺" },
    IconEntry { name: "megaphone", glyph: "📣" },
    IconEntry { name: "mic", glyph: "🎤" },
    IconEntry { name: "moon", glyph: "🌙" },
    IconEntry { name: "music.note", glyph: "🎵" },
    IconEntry { name: "newspaper", glyph: "📰" },
    IconEntry { name: "paperclip", glyph: "📎" },
    IconEntry { name: "pencil", glyph: "✏" },
    IconEntry { name: "person", glyph: "👤" },
    IconEntry { name: "phone", glyph: "📞" },
    IconEntry { name: "photo", glyph: "🖼" },
    IconEntry { name: "pin", glyph: "📌" },
    IconEntry { name: "printer", glyph: "🖨" },
    IconEntry { name: "scissors", glyph: "✂" },
    IconEntry { name: "shield", glyph: "🛡" },
    IconEntry { name: "sparkles", glyph: "✨" },
    IconEntry { name: "speaker", glyph: "🔊" },
    IconEntry { name: "star", glyph: "⭐" },
    IconEntry { name: "sun.max", glyph: "☀" },
    IconEntry { name: "tortoise", glyph: "🐢" },
    IconEntry { name: "trash", glyph: "🗑" },
    IconEntry { name: "tray", glyph: "📥" },
    IconEntry { name: "trophy", glyph: "🏆" },
    IconEntry { name: "truck", glyph: "🚚" },
    IconEntry { name: "wrench", glyph: "🔧" },
];

/// Glyph for a catalog name, falling back for unknown names.
pub fn icon_glyph(name: &str) -> &'static str {
    ICON_CATALOG
        .iter()
        .find(|e| e.name == name)
        .map(|e| e.glyph)
        .unwrap_or(FALLBACK_GLYPH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_icon_is_in_the_catalog() {
        assert!(ICON_CATALOG.iter().any(|e| e.name == DEFAULT_ICON));
    }

    #[test]
    fn unknown_names_fall_back() {
        assert_eq!(icon_glyph("no.such.icon"), FALLBACK_GLYPH);
        assert_eq!(icon_glyph("star"), "⭐");
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<_> = ICON_CATALOG.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ICON_CATALOG.len());
    }
}
