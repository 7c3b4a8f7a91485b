mod chrome;
mod experience;
mod home;

use crate::app::Page;

pub(crate) use chrome::{render_footer, render_header};
pub(crate) use experience::render_experience;
pub(crate) use home::{HomeView, render_home};

/// What a page asked the app to do this frame. Pages never mutate app state themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageAction {
    Navigate(Page),
    ToggleTheme,
    ScrollToTop,
}
