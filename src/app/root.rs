use {
    eframe::{
        Frame, Storage,
        egui::{Align, CentralPanel, Context, Key, Layout, ScrollArea},
    },
    serde::{Deserialize, Serialize},
};

use crate::{
    Cli,
    app::{Page, Theme, WebringState},
    config::{DF, WEBRING},
    data::spawn_neighbor_fetch,
    domain::TimelineWindow,
    ui::{
        HomeView, PageAction, Typewriter, UI_CONFIG, apply_visuals, render_experience,
        render_footer, render_header, render_home,
    },
    utils::now_utc,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) theme: Theme, // persists across sessions.
    #[serde(skip)]
    pub(crate) page: Page,
    #[serde(skip)]
    pub(crate) typewriter: Typewriter,
    #[serde(skip)]
    pub(crate) webring: WebringState,
    #[serde(skip)]
    timeline: Option<TimelineWindow>,
    #[serde(skip)]
    host: String,
    #[serde(skip)]
    offline: bool,
    #[serde(skip)]
    scroll_to_top: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            page: Page::default(),
            typewriter: Typewriter::default(),
            webring: WebringState::new(WEBRING.default_host),
            timeline: None,
            host: WEBRING.default_host.to_string(),
            offline: false,
            scroll_to_top: false,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli, timeline: TimelineWindow) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        #[cfg(debug_assertions)]
        if DF.log_theme {
            log::info!("Restored theme: {:?}", app.theme);
        }

        app.timeline = Some(timeline);
        app.host = args.host.trim().to_string();
        app.offline = args.offline;
        app.webring = WebringState::new(&app.host);
        app.page = Page::Home;
        app.sync_webring_mount();
        app
    }

    /// Mount the webring widget when its page is showing, tear it down otherwise.
    fn sync_webring_mount(&mut self) {
        if self.page.shows_webring() {
            if let Some(tx) = self.webring.mount() {
                if self.offline {
                    // Sender dropped here: the receiver sees a disconnect and the defaults stay.
                    return;
                }
                spawn_neighbor_fetch(self.host.clone(), tx);
            }
        } else if self.webring.is_mounted() {
            self.webring.teardown();
        }
    }

    pub(crate) fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        #[cfg(debug_assertions)]
        if DF.log_navigation {
            log::info!("Navigate {} -> {}", self.page, page);
        }
        self.page = page;
        self.scroll_to_top = true;
        self.sync_webring_mount();
    }

    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        #[cfg(debug_assertions)]
        if DF.log_theme {
            log::info!("Theme -> {:?}", self.theme);
        }
    }

    fn apply_action(&mut self, action: PageAction) {
        match action {
            PageAction::Navigate(page) => self.navigate(page),
            PageAction::ToggleTheme => self.toggle_theme(),
            PageAction::ScrollToTop => self.scroll_to_top = true,
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (toggle, home, experience) = ctx.input(|i| {
            (
                i.key_pressed(Key::T),
                i.key_pressed(Key::Num1),
                i.key_pressed(Key::Num2),
            )
        });
        if toggle {
            self.toggle_theme();
        }
        if home {
            self.navigate(Page::Home);
        }
        if experience {
            self.navigate(Page::Experience);
        }
    }

    /// Advance the name animation and ask for a repaint when the next step is due.
    fn tick_typewriter(&mut self, ctx: &Context) {
        if !matches!(self.page, Page::Home) {
            return;
        }
        let now = ctx.input(|i| i.time);
        self.typewriter.advance(now);
        let wait = self
            .typewriter
            .next_deadline()
            .map(|t| (t - now).max(0.0))
            .unwrap_or(0.0);
        // Cursor blink needs at least ~2 repaints a second
        let wait = wait.min(0.5);
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(wait));
    }

    fn render_page(&mut self, ctx: &Context) {
        let colors = self.theme.colors();
        let mut actions = Vec::new();
        let progress = self.timeline.map(|t| t.compute(now_utc()));

        CentralPanel::default()
            .frame(UI_CONFIG.page_frame(&colors))
            .show(ctx, |ui| {
                let mut scroll = ScrollArea::vertical().auto_shrink([false, false]);
                if std::mem::take(&mut self.scroll_to_top) {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }
                scroll.show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.content_width);
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            actions.extend(render_header(ui, self.page, &colors));
                            match self.page {
                                Page::Home => {
                                    if let Some(progress) = &progress {
                                        render_home(
                                            ui,
                                            &HomeView {
                                                colors: &colors,
                                                typewriter: &self.typewriter,
                                                progress,
                                                webring: &self.webring,
                                            },
                                        );
                                    }
                                }
                                Page::Experience => render_experience(ui, &colors),
                            }
                            actions.extend(render_footer(ui, self.theme, &colors));
                        });
                    });
                });
            });

        for action in actions {
            self.apply_action(action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        apply_visuals(ctx, &self.theme.colors(), self.theme.is_dark());
        self.handle_global_shortcuts(ctx);

        if self.webring.poll() {
            #[cfg(debug_assertions)]
            if DF.log_webring {
                log::info!("Webring links applied: {:?}", self.webring.links());
            }
        }
        if self.webring.is_pending() {
            // Keep polling until the one-shot fetch lands or gives up
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        self.tick_typewriter(ctx);
        self.render_page(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_theme {
            log::info!("💾 SAVE [App]: theme = {:?}", self.theme);
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_theme_is_persisted() {
        let mut app = App::default();
        app.page = Page::Experience;
        app.toggle_theme();
        let saved = serde_json::to_value(&app).unwrap();
        assert_eq!(saved, serde_json::json!({ "theme": "Light" }));
    }

    #[test]
    fn test_restore_starts_on_home_with_saved_theme() {
        let app: App = serde_json::from_str(r#"{ "theme": "Light" }"#).unwrap();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.page, Page::Home);
        assert!(!app.webring.is_loaded());

        let fresh: App = serde_json::from_str("{}").unwrap();
        assert_eq!(fresh.theme, Theme::Dark);
    }
}
