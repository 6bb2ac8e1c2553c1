//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every collection mutation (add / remove / update).
    pub log_mutations: bool,

    /// Log seed file reads and writes.
    pub log_persistence: bool,

    /// Log screen changes and edit-mode toggles.
    pub log_navigation: bool,

    // Nuke the seeds file automatically on start-up
    pub wipe_seeds_on_startup: bool,
}

pub const DF: LogFlags = LogFlags {
    log_mutations: true,
    log_persistence: true,
    log_navigation: false,

    wipe_seeds_on_startup: false,
};
