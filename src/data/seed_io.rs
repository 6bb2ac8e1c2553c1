//! Whole-file persistence of the seed collection.
//!
//! One JSON document, overwritten in full on every mutation and read back in
//! full on launch. Pretty-printed, because the document predates this crate
//! and was always pretty-printed.

use {
    crate::config::PERSISTENCE,
    crate::models::{AppSeed, SeedCollection},
    anyhow::Result,
    std::fs::File,
    std::io::{BufReader, BufWriter},
    std::path::Path,
};

pub(crate) fn save_seeds(collection: &SeedCollection) -> Result<()> {
    save_seeds_to(Path::new(PERSISTENCE.seeds.path), collection)
}

pub(crate) fn save_seeds_to(path: &Path, collection: &SeedCollection) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, collection)?;
    Ok(())
}

/// Load the collection. A missing file is the empty state, not an error;
/// a file that no longer parses is logged and yields the empty state too.
/// There is no repair pass.
pub(crate) fn load_seeds() -> SeedCollection {
    load_seeds_from(Path::new(PERSISTENCE.seeds.path))
}

pub(crate) fn load_seeds_from(path: &Path) -> SeedCollection {
    if !path.exists() {
        log::info!("No seeds file at {}; starting empty", path.display());
        return SeedCollection::new();
    }
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            log::error!("Failed to open seeds file {}: {err}", path.display());
            return SeedCollection::new();
        }
    };
    let reader = BufReader::new(file);
    match serde_json::from_reader::<_, Vec<AppSeed>>(reader) {
        Ok(seeds) => SeedCollection::from_seeds(seeds),
        Err(err) => {
            log::error!("Failed to decode seeds file {}: {err}", path.display());
            SeedCollection::new()
        }
    }
}

/// Delete the on-disk document. Used by `--reset` and the startup wipe flag.
pub(crate) fn wipe_seeds() -> Result<()> {
    let path = Path::new(PERSISTENCE.seeds.path);
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeedPatch;

    #[test]
    fn load_with_file_absent_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let c = load_seeds_from(&dir.path().join("nothing_here.json"));
        assert!(c.is_empty());
    }

    #[test]
    fn load_with_malformed_content_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_seeds.json");
        std::fs::write(&path, "{ this is not json ]").unwrap();
        let c = load_seeds_from(&path);
        assert!(c.is_empty());
    }

    #[test]
    fn single_seed_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_seeds.json");

        let mut c = SeedCollection::new();
        let id = c.add().unwrap();
        c.update(
            id,
            SeedPatch {
                app_name: Some("A".to_string()),
                content: Some("a note".to_string()),
                ..Default::default()
            },
        );
        save_seeds_to(&path, &c).unwrap();

        let loaded = load_seeds_from(&path);
        assert_eq!(loaded.len(), 1);
        let seed = loaded.get(id).expect("id preserved across the round trip");
        assert_eq!(seed, c.get(id).unwrap());
    }

    #[test]
    fn save_of_a_loaded_collection_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");

        let mut c = SeedCollection::new();
        for _ in 0..3 {
            c.add().unwrap();
        }
        save_seeds_to(&first, &c).unwrap();

        let loaded = load_seeds_from(&first);
        save_seeds_to(&second, &loaded).unwrap();

        assert_eq!(
            std::fs::read(&first).unwrap(),
            std::fs::read(&second).unwrap()
        );
    }

    #[test]
    fn save_overwrites_the_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_seeds.json");

        let mut c = SeedCollection::new();
        let id = c.add().unwrap();
        c.add().unwrap();
        save_seeds_to(&path, &c).unwrap();

        c.remove(id);
        save_seeds_to(&path, &c).unwrap();

        let loaded = load_seeds_from(&path);
        assert_eq!(loaded.len(), 1);
        assert!(loaded.get(id).is_none());
    }

    #[test]
    fn persisted_document_uses_the_original_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_seeds.json");

        let mut c = SeedCollection::new();
        c.add().unwrap();
        save_seeds_to(&path, &c).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"systemIconName\""));
        assert!(text.contains("\"appName\""));
        assert!(text.contains("\"foregroundColor\""));
        assert!(text.trim_start().starts_with('['));
    }
}
