use {
    crate::{
        app::WebringState,
        config::{LinkItem, PROFILE},
        domain::ProgressSnapshot,
        ui::{
            Typewriter, UI_CONFIG, UI_TEXT, UiColors, UiStyleExt, render_degree_progress,
            render_webring,
        },
    },
    eframe::egui::{Align, Layout, RichText, Sense, Stroke, Ui, vec2},
};

/// Everything the home page reads. Borrowed for one frame.
pub(crate) struct HomeView<'a> {
    pub colors: &'a UiColors,
    pub typewriter: &'a Typewriter,
    pub progress: &'a ProgressSnapshot,
    pub webring: &'a WebringState,
}

pub(crate) fn render_home(ui: &mut Ui, view: &HomeView<'_>) {
    let colors = view.colors;

    // Intro
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        ui.label(
            RichText::new(&UI_TEXT.intro_prefix)
                .size(18.0)
                .strong()
                .color(colors.heading),
        );
        view.typewriter.render(ui, colors.heading);
    });
    ui.add_space(8.0);
    for line in PROFILE.taglines {
        ui.label(RichText::new(*line).color(colors.text));
    }
    ui.add_space(8.0);
    ui.label(RichText::new(PROFILE.bio).color(colors.text));
    ui.section_gap();

    render_experience_timeline(ui, colors);
    ui.section_gap();

    render_link_list(
        ui,
        &UI_TEXT.heading_posts,
        PROFILE.posts_index.label,
        PROFILE.posts_index.url,
        PROFILE.latest_posts,
        colors,
    );
    ui.section_gap();

    render_link_list(
        ui,
        &UI_TEXT.heading_projects,
        PROFILE.projects_index.label,
        PROFILE.projects_index.url,
        PROFILE.recent_projects,
        colors,
    );
    ui.section_gap();

    ui.section_heading(&UI_TEXT.heading_degree, colors);
    render_degree_progress(ui, view.progress, colors);
    ui.section_gap();

    ui.section_heading(&UI_TEXT.heading_connect, colors);
    ui.horizontal_wrapped(|ui| {
        for link in PROFILE.contact_links {
            ui.hyperlink_to(RichText::new(link.label).color(colors.link), link.url);
        }
    });
    ui.add_space(12.0);
    render_webring(ui, view.webring, colors);
}

/// Vertical line with one dot per role, newest first.
fn render_experience_timeline(ui: &mut Ui, colors: &UiColors) {
    ui.section_heading(&UI_TEXT.heading_experience, colors);
    for (i, exp) in PROFILE.experiences.iter().enumerate() {
        let accent = UI_CONFIG.timeline_accents[i % UI_CONFIG.timeline_accents.len()];
        ui.horizontal(|ui| {
            let (dot, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
            ui.painter()
                .circle(dot.center(), 6.0, colors.background, Stroke::new(2.0, accent));
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(exp.position).strong().color(colors.heading));
                    ui.badge(exp.period, colors);
                });
                ui.label(RichText::new(exp.company).color(colors.text));
                ui.label_subdued(exp.location, colors);
            });
        });
        ui.add_space(10.0);
    }
}

fn render_link_list(
    ui: &mut Ui,
    heading: &str,
    index_label: &str,
    index_url: &str,
    items: &[LinkItem],
    colors: &UiColors,
) {
    ui.horizontal(|ui| {
        ui.section_heading(heading, colors);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.hyperlink_to(RichText::new(index_label).small().color(colors.subdued), index_url);
        });
    });
    for item in items {
        ui.bullet_link(item.label, item.url, colors);
    }
}
