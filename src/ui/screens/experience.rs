use {
    crate::{
        config::{Experience, PROFILE},
        ui::{UI_CONFIG, UI_TEXT, UiColors, UiStyleExt},
    },
    eframe::egui::{Align, Layout, RichText, Ui},
};

pub(crate) fn render_experience(ui: &mut Ui, colors: &UiColors) {
    ui.label(
        RichText::new(&UI_TEXT.heading_work_experience)
            .size(24.0)
            .strong()
            .color(colors.heading),
    );
    ui.label_subdued(UI_TEXT.subheading_work_experience.as_str(), colors);
    ui.section_gap();

    for exp in PROFILE.experiences {
        render_card(ui, exp, colors);
        ui.add_space(16.0);
    }

    ui.section_gap();
    UI_CONFIG.card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new(&UI_TEXT.heading_opportunities)
                .size(16.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(4.0);
        ui.label(RichText::new(PROFILE.opportunities_blurb).color(colors.text));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to(RichText::new(PROFILE.resume.label).color(colors.link), PROFILE.resume.url);
            ui.add_space(12.0);
            ui.hyperlink_to(
                RichText::new(PROFILE.email.label).color(colors.badge_text),
                PROFILE.email.url,
            );
        });
    });
}

fn render_card(ui: &mut Ui, exp: &Experience, colors: &UiColors) {
    UI_CONFIG.card_frame(colors).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(exp.position).size(16.0).strong().color(colors.heading));
                ui.label(RichText::new(exp.company).color(colors.text));
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.vertical(|ui| {
                    ui.badge(exp.duration, colors);
                    ui.label_subdued(exp.location, colors);
                });
            });
        });
        ui.add_space(8.0);
        for line in exp.description {
            ui.label(RichText::new(*line).color(colors.text));
        }
        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for tech in exp.technologies {
                ui.chip(tech, colors);
            }
        });
    });
}
