use {
    crate::{
        app::WebringState,
        config::WEBRING,
        ui::{UI_TEXT, UiColors},
    },
    eframe::egui::{RichText, Ui},
};

/// `← prev · webring · next →`
pub(crate) fn render_webring(ui: &mut Ui, state: &WebringState, colors: &UiColors) {
    let links = state.links();
    let row = ui.horizontal(|ui| {
        ui.hyperlink_to(
            RichText::new(&UI_TEXT.webring_prev).color(colors.link),
            &links.previous_url,
        );
        ui.label(RichText::new("·").color(colors.subdued));
        ui.hyperlink_to(
            RichText::new(&UI_TEXT.webring_hub).color(colors.link),
            WEBRING.hub_url,
        );
        ui.label(RichText::new("·").color(colors.subdued));
        ui.hyperlink_to(
            RichText::new(&UI_TEXT.webring_next).color(colors.link),
            &links.next_url,
        );
    });
    if !state.is_loaded() {
        row.response
            .on_hover_text(UI_TEXT.hover_webring_placeholder.as_str());
    }
}
