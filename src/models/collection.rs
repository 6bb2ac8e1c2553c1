//! The ordered, capped seed collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::MAX_SEEDS;
use crate::models::{AppSeed, Rgba};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    /// The grid is at capacity; the add is refused outright.
    #[error("the grid already holds {0} seeds")]
    Full(usize),
}

/// Fields to merge into an existing seed. `None` leaves a field alone.
#[derive(Debug, Default, Clone)]
pub struct SeedPatch {
    pub app_name: Option<String>,
    pub content: Option<String>,
    pub system_icon_name: Option<String>,
    pub foreground_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
}

impl SeedPatch {
    fn apply(self, seed: &mut AppSeed) {
        if let Some(name) = self.app_name {
            seed.app_name = name;
        }
        if let Some(content) = self.content {
            seed.content = content;
        }
        if let Some(icon) = self.system_icon_name {
            seed.system_icon_name = icon;
        }
        if let Some(fg) = self.foreground_color {
            seed.foreground_color = fg;
        }
        if let Some(bg) = self.background_color {
            seed.background_color = bg;
        }
    }
}

/// All of a user's seeds, in insertion order. Insertion order is display
/// order, and the whole collection is the unit of persistence: it serializes
/// transparently as the JSON array the seeds document stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedCollection {
    seeds: Vec<AppSeed>,
}

impl SeedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from loaded seeds, restoring the invariants a hand-edited
    /// file may have broken: duplicate ids are dropped (first one wins) and
    /// anything past capacity is cut.
    pub fn from_seeds(seeds: Vec<AppSeed>) -> Self {
        let mut out: Vec<AppSeed> = Vec::with_capacity(seeds.len().min(MAX_SEEDS));
        for seed in seeds {
            if out.iter().any(|s| s.id == seed.id) {
                log::warn!("Dropping seed with duplicate id {}", seed.id);
                continue;
            }
            if out.len() == MAX_SEEDS {
                log::warn!("Seeds file holds more than {MAX_SEEDS} entries; truncating");
                break;
            }
            out.push(seed);
        }
        Self { seeds: out }
    }

    /// Append a fresh default seed and hand back its id, or refuse when the
    /// grid is full.
    pub fn add(&mut self) -> Result<Uuid, CollectionError> {
        if self.seeds.len() >= MAX_SEEDS {
            return Err(CollectionError::Full(MAX_SEEDS));
        }
        let seed = AppSeed::new();
        let id = seed.id;
        self.seeds.push(seed);
        Ok(id)
    }

    /// Remove the matching seed. Unknown ids are a no-op: order and size of
    /// everything else stay put.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.seeds.len();
        self.seeds.retain(|s| s.id != id);
        self.seeds.len() != before
    }

    /// Merge `patch` into the matching seed. Returns false when the id is
    /// unknown; no other seed is touched either way.
    pub fn update(&mut self, id: Uuid, patch: SeedPatch) -> bool {
        match self.seeds.iter_mut().find(|s| s.id == id) {
            Some(seed) => {
                patch.apply(seed);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&AppSeed> {
        self.seeds.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppSeed> {
        self.seeds.iter()
    }

    pub fn seeds(&self) -> &[AppSeed] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.seeds.len() >= MAX_SEEDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_in_order_up_to_capacity() {
        let mut c = SeedCollection::new();
        let mut ids = Vec::new();
        for _ in 0..MAX_SEEDS {
            ids.push(c.add().expect("below capacity"));
        }
        assert_eq!(c.len(), MAX_SEEDS);
        let stored: Vec<Uuid> = c.iter().map(|s| s.id).collect();
        assert_eq!(stored, ids, "insertion order is display order");
    }

    #[test]
    fn add_past_capacity_fails_and_size_holds() {
        let mut c = SeedCollection::new();
        for _ in 0..MAX_SEEDS {
            c.add().unwrap();
        }
        assert_eq!(c.add(), Err(CollectionError::Full(MAX_SEEDS)));
        assert_eq!(c.len(), MAX_SEEDS);
        assert!(c.is_full());
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut c = SeedCollection::new();
        let a = c.add().unwrap();
        let b = c.add().unwrap();

        assert!(!c.remove(Uuid::new_v4()));
        assert_eq!(c.len(), 2);
        let order: Vec<Uuid> = c.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn remove_middle_preserves_order_of_the_rest() {
        let mut c = SeedCollection::new();
        let a = c.add().unwrap();
        let b = c.add().unwrap();
        let d = c.add().unwrap();

        assert!(c.remove(b));
        let order: Vec<Uuid> = c.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![a, d]);
    }

    #[test]
    fn size_never_goes_negative_or_past_cap() {
        let mut c = SeedCollection::new();
        let ghost = Uuid::new_v4();
        for _ in 0..5 {
            c.remove(ghost);
        }
        assert_eq!(c.len(), 0);
        for _ in 0..MAX_SEEDS + 10 {
            let _ = c.add();
        }
        assert_eq!(c.len(), MAX_SEEDS);
    }

    #[test]
    fn update_merges_only_the_given_fields() {
        let mut c = SeedCollection::new();
        let id = c.add().unwrap();

        let patch = SeedPatch {
            app_name: Some("Notes".to_string()),
            ..Default::default()
        };
        assert!(c.update(id, patch));

        let seed = c.get(id).unwrap();
        assert_eq!(seed.app_name, "Notes");
        assert_eq!(seed.system_icon_name, "star", "untouched field kept");
        assert_eq!(seed.foreground_color, Rgba::WHITE);
    }

    #[test]
    fn update_leaves_other_seeds_alone() {
        let mut c = SeedCollection::new();
        let a = c.add().unwrap();
        let b = c.add().unwrap();

        let before = c.get(b).unwrap().clone();
        c.update(
            a,
            SeedPatch {
                app_name: Some("Changed".to_string()),
                content: Some("body".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(c.get(b).unwrap(), &before);
    }

    #[test]
    fn update_unknown_id_reports_false() {
        let mut c = SeedCollection::new();
        c.add().unwrap();
        assert!(!c.update(Uuid::new_v4(), SeedPatch::default()));
    }

    #[test]
    fn from_seeds_drops_duplicates_and_truncates() {
        let template = AppSeed::new();
        let mut seeds = vec![template.clone(), template.clone()];
        for _ in 0..MAX_SEEDS + 5 {
            seeds.push(AppSeed::new());
        }
        let c = SeedCollection::from_seeds(seeds);
        assert_eq!(c.len(), MAX_SEEDS);
        assert_eq!(c.iter().filter(|s| s.id == template.id).count(), 1);
    }

    #[test]
    fn collection_serializes_as_a_bare_array() {
        let mut c = SeedCollection::new();
        c.add().unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.starts_with('['), "expected a JSON array, got {json}");
    }
}
