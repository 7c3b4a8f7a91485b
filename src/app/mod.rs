mod root;
mod state;

pub(crate) use state::{Page, Theme, WebringState};

pub use root::App;
