mod seed_io;

pub(crate) use seed_io::{load_seeds, save_seeds, wipe_seeds};
