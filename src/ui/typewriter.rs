use {
    crate::config::TYPEWRITER,
    eframe::egui::{Color32, RichText, Ui},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    /// Name fully typed, waiting out the hold before deleting
    Holding,
    Deleting,
}

/// Type / hold / delete cycle over a fixed list of names.
/// Driven by absolute time (seconds, as egui reports it) so it stays deterministic and testable.
#[derive(Debug, Clone)]
pub struct Typewriter {
    names: Vec<&'static str>,
    name_index: usize,
    /// Visible prefix length, in chars
    char_count: usize,
    phase: Phase,
    next_step_at: Option<f64>,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(TYPEWRITER.names)
    }
}

impl Typewriter {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            name_index: 0,
            char_count: 0,
            phase: Phase::Typing,
            next_step_at: None,
        }
    }

    fn current_name(&self) -> &'static str {
        self.names.get(self.name_index).copied().unwrap_or_default()
    }

    fn current_len(&self) -> usize {
        self.current_name().chars().count()
    }

    pub fn visible_text(&self) -> &'static str {
        let name = self.current_name();
        match name.char_indices().nth(self.char_count) {
            Some((byte_idx, _)) => &name[..byte_idx],
            None => name,
        }
    }

    /// When the next change is due. `None` before the first `advance`.
    pub fn next_deadline(&self) -> Option<f64> {
        self.next_step_at
    }

    /// Apply every step that is due at `now`. Returns true if the visible text changed.
    pub fn advance(&mut self, now: f64) -> bool {
        if self.names.is_empty() {
            return false;
        }
        let mut due = match self.next_step_at {
            Some(t) => t,
            None => {
                // First frame: the first char lands one typing delay from now
                self.next_step_at = Some(now + TYPEWRITER.type_delay_secs);
                return false;
            }
        };

        let before = (self.name_index, self.char_count);
        if now - due > self.cycle_secs() {
            // Long gap (page hidden): start the name over instead of replaying every missed step
            self.char_count = 0;
            self.phase = Phase::Typing;
            self.next_step_at = Some(now + TYPEWRITER.type_delay_secs);
            return before != (self.name_index, self.char_count);
        }
        while due <= now {
            let delay = self.step();
            due += delay;
        }
        self.next_step_at = Some(due);
        before != (self.name_index, self.char_count)
    }

    /// Time for one full type / hold / delete pass over the current name.
    fn cycle_secs(&self) -> f64 {
        let len = self.current_len() as f64;
        (len + 1.0) * TYPEWRITER.type_delay_secs
            + TYPEWRITER.hold_secs
            + (len + 2.0) * TYPEWRITER.delete_delay_secs
    }

    /// One state transition. Returns the delay until the next one.
    fn step(&mut self) -> f64 {
        match self.phase {
            Phase::Typing => {
                if self.char_count < self.current_len() {
                    self.char_count += 1;
                    TYPEWRITER.type_delay_secs
                } else {
                    self.phase = Phase::Holding;
                    TYPEWRITER.hold_secs
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                TYPEWRITER.delete_delay_secs
            }
            Phase::Deleting => {
                if self.char_count > 0 {
                    self.char_count -= 1;
                    TYPEWRITER.delete_delay_secs
                } else {
                    self.phase = Phase::Typing;
                    self.name_index = (self.name_index + 1) % self.names.len();
                    TYPEWRITER.type_delay_secs
                }
            }
        }
    }

    pub fn render(&self, ui: &mut Ui, text_color: Color32) {
        ui.label(RichText::new(self.visible_text()).strong().color(text_color));
        // Blink at 1Hz off the same clock the animation runs on
        let time = ui.input(|i| i.time);
        let alpha = if (time * 2.0) as i64 % 2 == 0 { 0.7 } else { 0.15 };
        ui.label(RichText::new(TYPEWRITER.cursor).color(text_color.gamma_multiply(alpha)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 0.120;
    const D: f64 = 0.080;
    const HOLD: f64 = 2.0;
    // Query slightly after each deadline so float accumulation can't land us a hair early
    const EPS: f64 = 1e-6;

    fn at(tw: &mut Typewriter, now: f64) -> &'static str {
        tw.advance(now + EPS);
        tw.visible_text()
    }

    #[test]
    fn test_types_one_char_per_delay() {
        let mut tw = Typewriter::new(&["Dev!"]);
        assert!(!tw.advance(0.0));
        assert_eq!(tw.visible_text(), "");
        assert_eq!(at(&mut tw, T - 0.01), "");
        assert_eq!(at(&mut tw, T), "D");
        assert_eq!(at(&mut tw, 2.0 * T), "De");
        assert_eq!(at(&mut tw, 4.0 * T), "Dev!");
    }

    #[test]
    fn test_holds_then_deletes_then_next_name() {
        let mut tw = Typewriter::new(&["ab", "xyz"]);
        tw.advance(0.0);
        let typed_at = 2.0 * T;
        assert_eq!(at(&mut tw, typed_at), "ab");
        // One more typing tick notices the name is complete, then the hold runs
        let hold_ends = typed_at + T + HOLD;
        assert_eq!(at(&mut tw, hold_ends - 0.01), "ab");
        assert_eq!(at(&mut tw, hold_ends), "ab");
        assert_eq!(at(&mut tw, hold_ends + D), "a");
        assert_eq!(at(&mut tw, hold_ends + 2.0 * D), "");
        // Empty -> switch name, then type the next one
        let switched = hold_ends + 3.0 * D;
        assert_eq!(at(&mut tw, switched), "");
        assert_eq!(at(&mut tw, switched + T), "x");
    }

    #[test]
    fn test_cycles_back_to_first_name() {
        let mut tw = Typewriter::new(&["a", "b"]);
        tw.advance(0.0);
        let mut seen = Vec::new();
        let mut now = 0.0;
        while now < 20.0 {
            now += 0.01;
            tw.advance(now);
            let text = tw.visible_text();
            if !text.is_empty() && seen.last() != Some(&text) {
                seen.push(text);
            }
        }
        assert!(seen.len() >= 4, "{:?}", seen);
        assert_eq!(&seen[..4], &["a", "b", "a", "b"]);
    }

    #[test]
    fn test_large_time_jump_catches_up() {
        let mut tw = Typewriter::new(&["Devansh!"]);
        tw.advance(0.0);
        assert!(tw.advance(10.0 * T));
        assert_eq!(tw.visible_text(), "Devansh!");
        assert!(tw.next_deadline().unwrap() > 10.0 * T);
    }

    #[test]
    fn test_long_absence_restarts_the_name() {
        let mut tw = Typewriter::new(&["Devansh!"]);
        tw.advance(0.0);
        assert_eq!(at(&mut tw, 3.0 * T), "Dev");
        // A day away: restart from an empty name rather than replaying ~1M steps
        let back = 86_400.0;
        assert!(tw.advance(back));
        assert_eq!(tw.visible_text(), "");
        assert_eq!(tw.next_deadline(), Some(back + T));
        assert_eq!(at(&mut tw, back + T), "D");
    }

    #[test]
    fn test_multibyte_names_slice_on_chars() {
        let mut tw = Typewriter::new(&["né!"]);
        tw.advance(0.0);
        assert_eq!(at(&mut tw, 2.0 * T), "né");
    }

    #[test]
    fn test_no_names_is_inert() {
        let mut tw = Typewriter::new(&[]);
        assert!(!tw.advance(5.0));
        assert_eq!(tw.visible_text(), "");
    }
}
