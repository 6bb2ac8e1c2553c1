//! File persistence configuration

/// Configuration for the seeds document
pub struct SeedsPersistenceConfig {
    /// Path of the JSON document holding the whole collection
    pub path: &'static str,
}

/// Configuration for application UI state persistence
pub struct AppPersistenceConfig {
    /// Path where eframe saves window / UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub seeds: SeedsPersistenceConfig,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    seeds: SeedsPersistenceConfig {
        path: "app_seeds.json",
    },
    app: AppPersistenceConfig {
        state_path: ".seedboard_state.ron",
    },
};
