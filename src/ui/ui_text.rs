use std::sync::LazyLock;

pub const ICON_SUN: &str = "☀";
pub const ICON_MOON: &str = "🌙";
pub const ICON_ARROW_LEFT: &str = "←";
pub const ICON_ARROW_RIGHT: &str = "→";
pub const ICON_BULLET: &str = "•";

pub struct UiText {
    // --- Home ---
    pub intro_prefix: String,
    pub heading_experience: String,
    pub heading_posts: String,
    pub heading_projects: String,
    pub heading_degree: String,
    pub heading_connect: String,
    pub label_degree_progress: String,

    // --- Experience page ---
    pub heading_work_experience: String,
    pub subheading_work_experience: String,
    pub heading_opportunities: String,

    // --- Webring ---
    pub webring_prev: String,
    pub webring_hub: String,
    pub webring_next: String,
    pub hover_webring_placeholder: String,

    // --- Footer ---
    pub footer_back_to_top: String,
    pub icon_theme_to_light: String,
    pub icon_theme_to_dark: String,
    pub hover_toggle_theme: String,

    pub bullet: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    intro_prefix: "Hi, I'm".to_string(),
    heading_experience: "Experience".to_string(),
    heading_posts: "Latest Posts".to_string(),
    heading_projects: "Recent Projects".to_string(),
    heading_degree: "Degree Progress".to_string(),
    heading_connect: "Let's Connect!".to_string(),
    label_degree_progress: "Degree Progress".to_string(),

    heading_work_experience: "Work Experience".to_string(),
    subheading_work_experience: "My professional journey and internships".to_string(),
    heading_opportunities: "🚀 Looking for Opportunities".to_string(),

    webring_prev: format!("{} prev", ICON_ARROW_LEFT),
    webring_hub: "webring".to_string(),
    webring_next: format!("next {}", ICON_ARROW_RIGHT),
    hover_webring_placeholder: "Ring members not loaded; links go through the webring hub".to_string(),

    footer_back_to_top: "Back to the top".to_string(),
    icon_theme_to_light: ICON_SUN.to_string(),
    icon_theme_to_dark: ICON_MOON.to_string(),
    hover_toggle_theme: "Toggle theme (T)".to_string(),

    bullet: ICON_BULLET.to_string(),
});
