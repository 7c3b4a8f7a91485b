use {
    super::PageAction,
    crate::{
        app::{Page, Theme},
        config::PROFILE,
        ui::{UI_TEXT, UiColors, UiStyleExt},
    },
    eframe::egui::{Align, Button, Layout, RichText, Ui},
    strum::IntoEnumIterator,
};

/// Owner name (click = home) on the left; external links and page tabs on the right.
pub(crate) fn render_header(ui: &mut Ui, current: Page, colors: &UiColors) -> Option<PageAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let name = RichText::new(PROFILE.owner_name)
            .size(22.0)
            .strong()
            .color(colors.heading);
        if ui.add(Button::new(name).frame(false)).clicked() && current != Page::Home {
            action = Some(PageAction::Navigate(Page::Home));
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            for page in Page::iter().filter(|p| *p != current && *p != Page::Home) {
                let label = RichText::new(page.to_string()).color(colors.link);
                if ui.add(Button::new(label).frame(false)).clicked() {
                    action = Some(PageAction::Navigate(page));
                }
            }
            for link in PROFILE.header_links.iter().rev() {
                ui.hyperlink_to(RichText::new(link.label).color(colors.link), link.url);
            }
        });
    });
    ui.section_gap();
    action
}

/// Divider, "Back to the top" and the theme toggle.
pub(crate) fn render_footer(ui: &mut Ui, theme: Theme, colors: &UiColors) -> Option<PageAction> {
    let mut action = None;
    ui.section_gap();
    ui.separator();
    ui.horizontal(|ui| {
        let back = RichText::new(&UI_TEXT.footer_back_to_top).color(colors.subdued);
        if ui.add(Button::new(back).frame(false)).clicked() {
            action = Some(PageAction::ScrollToTop);
        }
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let icon = if theme.is_dark() {
                &UI_TEXT.icon_theme_to_light
            } else {
                &UI_TEXT.icon_theme_to_dark
            };
            if ui
                .add(Button::new(RichText::new(icon).size(16.0)).frame(false))
                .on_hover_text(UI_TEXT.hover_toggle_theme.as_str())
                .clicked()
            {
                action = Some(PageAction::ToggleTheme);
            }
        });
    });
    action
}
