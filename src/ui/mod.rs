mod degree_progress;
mod screens;
mod styles;
mod typewriter;
mod ui_config;
mod ui_text;
mod webring;

pub(crate) use degree_progress::render_degree_progress;

pub(crate) use screens::{
    HomeView, PageAction, render_experience, render_footer, render_header, render_home,
};

pub(crate) use styles::{UiStyleExt, apply_visuals, segment_bar};

pub use typewriter::Typewriter;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT, UiColors};

pub(crate) use webring::render_webring;
