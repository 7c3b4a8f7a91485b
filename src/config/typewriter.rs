pub struct TypewriterConfig {
    /// Names cycled through after "Hi, I'm"
    pub names: &'static [&'static str],
    pub type_delay_secs: f64,
    pub delete_delay_secs: f64,
    /// Pause at the fully typed name before deleting starts
    pub hold_secs: f64,
    pub cursor: &'static str,
}

pub const TYPEWRITER: TypewriterConfig = TypewriterConfig {
    names: &["Devansh!", "Dev!"],
    type_delay_secs: 0.120,
    delete_delay_secs: 0.080,
    hold_secs: 2.0,
    cursor: "|",
};
