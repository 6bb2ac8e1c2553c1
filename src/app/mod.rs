mod root;
mod state;

pub(crate) use state::{EditorState, Notice, Screen};

pub use root::App;
