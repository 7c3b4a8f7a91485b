use {
    crate::{
        domain::{ProgressBar, ProgressSnapshot},
        ui::{UI_TEXT, UiColors, segment_bar},
    },
    eframe::egui::{RichText, Ui},
};

/// `Degree Progress [████░░░░] 623 / 1337 days (46.6%)`, with a thin proportional bar underneath.
pub(crate) fn render_degree_progress(ui: &mut Ui, snapshot: &ProgressSnapshot, colors: &UiColors) {
    let bar = ProgressBar::default();
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new(&UI_TEXT.label_degree_progress)
                .strong()
                .color(colors.text),
        );
        ui.label(
            RichText::new(bar.render(snapshot.percentage))
                .monospace()
                .color(colors.text),
        );
        ui.label(
            RichText::new(snapshot.summary())
                .monospace()
                .color(colors.text),
        );
    });
    ui.add_space(4.0);
    segment_bar(ui, snapshot.fraction(), colors.bar_filled, colors.bar_empty);
}
