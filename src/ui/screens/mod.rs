mod detail;
mod grid;

pub(crate) use detail::{DetailAction, render_detail};
pub(crate) use grid::{GridAction, render_grid};
