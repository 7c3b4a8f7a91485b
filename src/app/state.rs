// src/app/state.rs

use {
    crate::{
        config::WEBRING,
        domain::NeighborResult,
        ui::{UI_CONFIG, UiColors},
    },
    serde::{Deserialize, Serialize},
    std::sync::mpsc::{self, Receiver, Sender},
    strum_macros::{Display, EnumIter},
};

/// Site-wide color scheme. Owned by `App`; render code receives the derived colors, never this directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub(crate) fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub(crate) fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub(crate) fn colors(self) -> UiColors {
        match self {
            Self::Light => UI_CONFIG.light,
            Self::Dark => UI_CONFIG.dark,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, Display)]
pub(crate) enum Page {
    #[default]
    #[strum(to_string = "home")]
    Home,
    #[strum(to_string = "experience")]
    Experience,
}

impl Page {
    pub(crate) fn shows_webring(self) -> bool {
        matches!(self, Self::Home)
    }
}

/// Links shown by the webring widget plus the in-flight fetch, if any.
///
/// Starts on the placeholder links. The fetch result is applied only while the widget is mounted:
/// `teardown` drops the receiver, so a late result has nowhere to go.
pub(crate) struct WebringState {
    links: NeighborResult,
    mounted: bool,
    loaded: bool,
    rx: Option<Receiver<NeighborResult>>,
}

impl Default for WebringState {
    fn default() -> Self {
        Self::new(WEBRING.default_host)
    }
}

impl WebringState {
    pub(crate) fn new(host: &str) -> Self {
        Self {
            links: NeighborResult::placeholders(host),
            mounted: false,
            loaded: false,
            rx: None,
        }
    }

    pub(crate) fn links(&self) -> &NeighborResult {
        &self.links
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// A fetch is in flight and its result would still be applied
    pub(crate) fn is_pending(&self) -> bool {
        self.mounted && self.rx.is_some()
    }

    /// Mark the widget visible. Hands back a sender when a fetch should be started
    /// (first mount, or a remount after an earlier fetch was abandoned).
    pub(crate) fn mount(&mut self) -> Option<Sender<NeighborResult>> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        if self.loaded {
            return None;
        }
        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        Some(tx)
    }

    pub(crate) fn teardown(&mut self) {
        self.mounted = false;
        self.rx = None;
    }

    /// Apply a finished fetch. Returns true if the links changed.
    pub(crate) fn poll(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(rx) = &self.rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.links = result;
                self.loaded = true;
                self.rx = None;
                true
            }
            Err(mpsc::TryRecvError::Empty) => false,
            Err(mpsc::TryRecvError::Disconnected) => {
                // Fetch gave up (feed down, bad body). Defaults stay.
                self.rx = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn fetched() -> NeighborResult {
        NeighborResult {
            previous_url: "https://x.com".to_string(),
            next_url: "https://z.com".to_string(),
        }
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert_ne!(Theme::Dark.colors().background, Theme::Light.colors().background);
    }

    #[test]
    fn test_pages() {
        let names: Vec<String> = Page::iter().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["home", "experience"]);
        assert!(Page::Home.shows_webring());
        assert!(!Page::Experience.shows_webring());
    }

    #[test]
    fn test_webring_applies_result_while_mounted() {
        let mut state = WebringState::new("y.com");
        assert_eq!(state.links(), &NeighborResult::placeholders("y.com"));
        let tx = state.mount().unwrap();
        assert!(!state.poll());
        tx.send(fetched()).unwrap();
        assert!(state.poll());
        assert_eq!(state.links(), &fetched());
        assert!(state.is_loaded());
    }

    #[test]
    fn test_webring_ignores_result_after_teardown() {
        let mut state = WebringState::new("y.com");
        let tx = state.mount().unwrap();
        state.teardown();
        // Receiver is gone, so the late result can't be delivered
        assert!(tx.send(fetched()).is_err());
        assert!(!state.poll());
        assert_eq!(state.links(), &NeighborResult::placeholders("y.com"));
    }

    #[test]
    fn test_webring_failed_fetch_keeps_defaults() {
        let mut state = WebringState::new("y.com");
        let tx = state.mount().unwrap();
        drop(tx);
        assert!(state.is_pending());
        assert!(!state.poll());
        assert!(!state.is_pending());
        assert_eq!(state.links(), &NeighborResult::placeholders("y.com"));
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_webring_mount_fetches_once() {
        let mut state = WebringState::new("y.com");
        let tx = state.mount().unwrap();
        assert!(state.mount().is_none(), "already mounted");
        tx.send(fetched()).unwrap();
        state.poll();
        state.teardown();
        assert!(state.mount().is_none(), "already loaded");
        assert!(state.is_mounted());
        assert_eq!(state.links(), &fetched());
    }

    #[test]
    fn test_webring_remount_after_abandoned_fetch_refetches() {
        let mut state = WebringState::new("y.com");
        let _first = state.mount().unwrap();
        state.teardown();
        assert!(state.mount().is_some());
    }
}
