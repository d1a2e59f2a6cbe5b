mod root;
mod state;

pub(crate) use state::{AppState, Controls};

pub use root::App;
