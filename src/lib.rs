#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::PERSISTENCE;
pub use models::{AppSeed, CollectionError, Rgba, SeedCollection, SeedPatch};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Start with an empty grid, deleting the saved seeds file
    #[arg(long, default_value_t = false)]
    pub reset: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
