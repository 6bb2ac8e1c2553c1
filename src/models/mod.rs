mod collection;
mod color;
mod seed;

pub use collection::{CollectionError, SeedCollection, SeedPatch};
pub use color::Rgba;
pub use seed::AppSeed;
