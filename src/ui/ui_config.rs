use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Colors for one theme
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub background: Color32,
    pub text: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub link: Color32,
    pub border: Color32,
    pub card_fill: Color32,
    pub badge_fill: Color32,
    pub badge_text: Color32,
    pub badge_border: Color32,
    pub chip_fill: Color32,
    pub bar_filled: Color32,
    pub bar_empty: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub dark: UiColors,
    pub light: UiColors,
    /// Content column width; pages are centred inside the window
    pub content_width: f32,
    pub section_spacing: f32,
    /// Accent colors cycled over the experience timeline dots
    pub timeline_accents: [Color32; 3],
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiColors {
        background: Color32::from_rgb(15, 15, 15),
        text: Color32::from_rgb(212, 212, 212),
        heading: Color32::from_rgb(240, 240, 240),
        subdued: Color32::from_rgb(156, 163, 175),
        link: Color32::from_rgb(212, 212, 212),
        border: Color32::from_rgb(31, 41, 55),
        card_fill: Color32::from_rgb(20, 22, 28),
        badge_fill: Color32::from_rgb(22, 33, 62),
        badge_text: Color32::from_rgb(96, 165, 250),
        badge_border: Color32::from_rgb(29, 78, 216),
        chip_fill: Color32::from_rgb(31, 41, 55),
        bar_filled: Color32::from_rgb(212, 212, 212),
        bar_empty: Color32::from_rgb(55, 55, 60),
    },
    light: UiColors {
        background: Color32::WHITE,
        text: Color32::from_rgb(17, 24, 39),
        heading: Color32::from_rgb(17, 24, 39),
        subdued: Color32::from_rgb(75, 85, 99),
        link: Color32::from_rgb(17, 24, 39),
        border: Color32::from_rgb(229, 231, 235),
        card_fill: Color32::from_rgb(249, 250, 251),
        badge_fill: Color32::from_rgb(239, 246, 255),
        badge_text: Color32::from_rgb(29, 78, 216),
        badge_border: Color32::from_rgb(191, 219, 254),
        chip_fill: Color32::WHITE,
        bar_filled: Color32::from_rgb(55, 65, 81),
        bar_empty: Color32::from_rgb(229, 231, 235),
    },
    content_width: 640.0,
    section_spacing: 28.0,
    timeline_accents: [
        Color32::from_rgb(59, 130, 246),
        Color32::from_rgb(168, 85, 247),
        Color32::from_rgb(249, 115, 22),
    ],
};

impl UiConfig {
    /// Whole-window frame (page background)
    pub fn page_frame(&self, colors: &UiColors) -> Frame {
        Frame {
            fill: colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 32),
            ..Default::default()
        }
    }

    /// Bordered box used for experience cards and the opportunities box
    pub fn card_frame(&self, colors: &UiColors) -> Frame {
        Frame {
            fill: colors.card_fill,
            stroke: Stroke::new(1.0, colors.border),
            inner_margin: Margin::same(16),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}
