//! Debugging feature flags.

pub struct LogFlags {
    /// Feed fetch outcome, match method and resolved links
    pub log_webring: bool,

    /// Theme toggles and restored theme on startup
    pub log_theme: bool,

    /// Snapshot computed at startup
    pub log_progress: bool,

    /// Page switches (and the webring teardown they cause)
    pub log_navigation: bool,
}

pub const DF: LogFlags = LogFlags {
    log_webring: true,
    log_theme: false,
    log_progress: true,
    log_navigation: false,
};
