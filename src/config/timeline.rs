//! Degree timeline configuration

/// The fixed window the degree progress bar measures.
pub struct TimelineConfig {
    /// First day of the degree (UTC midnight, `%Y-%m-%d`)
    pub start: &'static str,
    /// Expected graduation day (UTC midnight, `%Y-%m-%d`)
    pub end: &'static str,
    /// Number of glyph cells in the textual bar
    pub bar_width: usize,
    pub glyph_filled: char,
    pub glyph_empty: char,
}

pub const TIMELINE: TimelineConfig = TimelineConfig {
    start: "2023-09-01",
    end: "2027-04-30",
    bar_width: 24,
    glyph_filled: '█',
    glyph_empty: '░',
};
