use {
    crate::ui::{UI_CONFIG, UiColors},
    eframe::egui::{
        Color32, Context, CornerRadius, Frame, Margin, Response, RichText, Stroke, Ui, Visuals,
    },
};

/// Push the theme's colors into egui. Called every frame so a toggle lands immediately.
pub(crate) fn apply_visuals(ctx: &Context, colors: &UiColors, dark: bool) {
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };
    visuals.window_fill = colors.background;
    visuals.panel_fill = colors.background;
    visuals.hyperlink_color = colors.link;
    visuals.widgets.noninteractive.fg_stroke.color = colors.text;
    visuals.widgets.inactive.fg_stroke.color = colors.text;
    visuals.widgets.hovered.fg_stroke.color = colors.heading;
    visuals.widgets.active.fg_stroke.color = colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

pub(crate) trait UiStyleExt {
    fn section_heading(&mut self, text: &str, colors: &UiColors);
    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors);
    /// Small rounded pill (date ranges)
    fn badge(&mut self, text: &str, colors: &UiColors);
    /// Bordered tag (technologies)
    fn chip(&mut self, text: &str, colors: &UiColors);
    fn bullet_link(&mut self, label: &str, url: &str, colors: &UiColors) -> Response;
    fn section_gap(&mut self);
}

impl UiStyleExt for Ui {
    fn section_heading(&mut self, text: &str, colors: &UiColors) {
        self.label(RichText::new(text).size(20.0).strong().color(colors.heading));
        self.add_space(8.0);
    }

    fn label_subdued(&mut self, text: impl Into<String>, colors: &UiColors) {
        self.label(RichText::new(text.into()).small().color(colors.subdued));
    }

    fn badge(&mut self, text: &str, colors: &UiColors) {
        Frame {
            fill: colors.badge_fill,
            stroke: Stroke::new(1.0, colors.badge_border),
            inner_margin: Margin::symmetric(8, 2),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).small().color(colors.badge_text));
        });
    }

    fn chip(&mut self, text: &str, colors: &UiColors) {
        Frame {
            fill: colors.chip_fill,
            stroke: Stroke::new(1.0, colors.border),
            inner_margin: Margin::symmetric(6, 2),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).small().color(colors.text));
        });
    }

    fn bullet_link(&mut self, label: &str, url: &str, colors: &UiColors) -> Response {
        self.horizontal(|ui| {
            ui.label(RichText::new(&crate::ui::UI_TEXT.bullet).color(colors.subdued));
            ui.hyperlink_to(RichText::new(label).color(colors.link), url)
        })
        .inner
    }

    fn section_gap(&mut self) {
        self.add_space(UI_CONFIG.section_spacing);
    }
}

/// Two proportional segments, the graphical alternative to the glyph bar.
pub(crate) fn segment_bar(ui: &mut Ui, fraction: f32, filled: Color32, empty: Color32) {
    let width = ui.available_width().min(UI_CONFIG.content_width);
    let (rect, _) = ui.allocate_exact_size(
        eframe::egui::vec2(width, 6.0),
        eframe::egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, empty);
    let mut done = rect;
    done.set_width(rect.width() * fraction.clamp(0.0, 1.0));
    painter.rect_filled(done, 3.0, filled);
}
