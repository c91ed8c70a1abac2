//! The typewriter state machine itself.

use std::time::Duration;

use super::{Phase, TypeFrame, TypingOptions};

/// Advances a cursor through a list of strings, typing characters in,
/// pausing, deleting them out, and looping.
///
/// Every mutation happens through [`on_phase_timer`](Self::on_phase_timer)
/// or [`on_blink_timer`](Self::on_blink_timer); the returned `Option<Duration>`
/// is the delay until the next phase event, with `None` meaning the sequence
/// is inert or terminal and no phase timer should be armed. Exactly one phase
/// timer is ever pending because each transition replaces the previous delay.
#[derive(Debug)]
pub struct TypingSequencer {
    options: TypingOptions,
    /// Index into `options.items`, wraps modulo the item count
    item_index: usize,
    /// Character position within the current item, counted in chars
    cursor_pos: usize,
    visible: String,
    phase: Phase,
    blink_on: bool,
}

impl TypingSequencer {
    pub fn new(options: TypingOptions) -> Self {
        Self {
            options,
            item_index: 0,
            cursor_pos: 0,
            visible: String::new(),
            phase: Phase::Idle,
            blink_on: true,
        }
    }

    /// Begin the sequence. Returns the delay until the first phase event,
    /// or `None` when there is nothing to type (empty item list is inert,
    /// not an error).
    pub fn start(&mut self) -> Option<Duration> {
        if self.options.items.is_empty() {
            return None;
        }
        Some(self.options.initial_delay)
    }

    /// Whether the independent cursor-blink timer should run at all.
    /// An inert sequencer schedules nothing, blink included.
    pub fn wants_blink_timer(&self) -> bool {
        self.options.show_cursor && !self.options.items.is_empty()
    }

    /// Handle an expired phase timer and return the delay until the next one.
    ///
    /// `None` means terminal: the visible text will never mutate again until
    /// a reconfiguration.
    pub fn on_phase_timer(&mut self) -> Option<Duration> {
        match self.phase {
            Phase::Idle => {
                // Initial delay expired; begin typing the current item
                self.phase = Phase::TypingIn;
                Some(self.options.typing_speed)
            }
            Phase::TypingIn => {
                let item = &self.options.items[self.item_index];
                if let Some(next) = item.chars().nth(self.cursor_pos) {
                    self.visible.push(next);
                    self.cursor_pos += 1;
                }
                if self.cursor_pos < item.chars().count() {
                    return Some(self.options.typing_speed);
                }
                // Item fully typed
                if self.options.loop_items && self.options.items.len() > 1 {
                    self.phase = Phase::Pausing;
                    Some(self.options.pause)
                } else {
                    self.phase = Phase::Idle;
                    None
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                Some(self.options.deleting_speed)
            }
            Phase::Deleting => {
                if self.visible.pop().is_some() {
                    self.cursor_pos -= 1;
                }
                if !self.visible.is_empty() {
                    return Some(self.options.deleting_speed);
                }
                // Everything deleted; advance or finish
                let last = self.item_index + 1 == self.options.items.len();
                if last && !self.options.loop_items {
                    self.phase = Phase::Idle;
                    None
                } else {
                    self.item_index = (self.item_index + 1) % self.options.items.len();
                    self.cursor_pos = 0;
                    self.phase = Phase::TypingIn;
                    Some(self.options.pause)
                }
            }
        }
    }

    /// Toggle the cursor blink state. Driven by the engine's fixed-period
    /// blink timer, independent of the phase cycle.
    pub fn on_blink_timer(&mut self) {
        self.blink_on = !self.blink_on;
    }

    /// Replace the options and restart from scratch.
    ///
    /// Returns the delay until the first phase event of the new
    /// configuration, exactly as [`start`](Self::start). The caller must
    /// cancel the old phase and blink timers first.
    pub fn reconfigure(&mut self, options: TypingOptions) -> Option<Duration> {
        self.options = options;
        self.item_index = 0;
        self.cursor_pos = 0;
        self.visible.clear();
        self.phase = Phase::Idle;
        self.blink_on = true;
        self.start()
    }

    /// Current rendered state.
    pub fn frame(&self) -> TypeFrame {
        let suppressed = self.options.hide_cursor_while_typing && self.phase.is_active();
        let colors = &self.options.text_colors;
        TypeFrame {
            text: self.visible.clone(),
            show_cursor: self.options.show_cursor,
            cursor_visible: self.options.show_cursor && self.blink_on && !suppressed,
            cursor_character: self.options.cursor_character.clone(),
            color: if colors.is_empty() {
                None
            } else {
                Some(colors[self.item_index % colors.len()].clone())
            },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    pub fn visible_text(&self) -> &str {
        &self.visible
    }

    pub fn options(&self) -> &TypingOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> TypingOptions {
        TypingOptions {
            items: items.iter().map(|s| s.to_string()).collect(),
            typing_speed: Duration::from_millis(10),
            deleting_speed: Duration::from_millis(10),
            pause: Duration::from_millis(100),
            initial_delay: Duration::from_millis(0),
            ..Default::default()
        }
    }

    /// Drive the phase timer until it goes terminal, collecting the visible
    /// text after each event. Panics if the sequence never terminates.
    fn run_to_completion(seq: &mut TypingSequencer) -> Vec<String> {
        let mut trace = Vec::new();
        assert!(seq.start().is_some());
        for _ in 0..1000 {
            match seq.on_phase_timer() {
                Some(_) => trace.push(seq.visible_text().to_string()),
                None => {
                    trace.push(seq.visible_text().to_string());
                    return trace;
                }
            }
        }
        panic!("sequence did not terminate");
    }

    #[test]
    fn empty_items_is_inert() {
        let mut seq = TypingSequencer::new(options(&[]));
        assert_eq!(seq.start(), None);
        assert!(!seq.wants_blink_timer());
        assert_eq!(seq.frame().text, "");
    }

    #[test]
    fn single_item_types_out_and_stops() {
        let mut seq = TypingSequencer::new(options(&["Hi"]));
        let trace = run_to_completion(&mut seq);
        assert_eq!(trace, vec!["", "H", "Hi"]);
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(seq.visible_text(), "Hi");
    }

    #[test]
    fn non_looping_multiple_items_stop_after_first() {
        // Without looping there is no deletion, so the cycle never reaches
        // the second item.
        let mut seq = TypingSequencer::new(options(&["ab", "cd"]));
        run_to_completion(&mut seq);
        assert_eq!(seq.visible_text(), "ab");
        assert_eq!(seq.item_index(), 0);
    }

    #[test]
    fn looping_cycle_visits_every_item() {
        let mut opts = options(&["Hi", "Yo"]);
        opts.loop_items = true;
        let mut seq = TypingSequencer::new(opts);
        assert!(seq.start().is_some());

        let mut trace = Vec::new();
        for _ in 0..16 {
            assert!(seq.on_phase_timer().is_some(), "looping must not stop");
            trace.push(seq.visible_text().to_string());
        }
        assert_eq!(
            trace,
            vec![
                "", "H", "Hi", "Hi", "H", "", "Y", "Yo", "Yo", "Y", "", "H", "Hi", "Hi", "H", "",
            ]
        );
    }

    #[test]
    fn looping_phase_trace_is_periodic() {
        let mut opts = options(&["ab", "cd", "ef"]);
        opts.loop_items = true;
        let mut seq = TypingSequencer::new(opts);
        seq.start();

        // One full cycle per item: type, pause, delete, advance
        let mut observed = Vec::new();
        for _ in 0..60 {
            seq.on_phase_timer();
            observed.push((seq.item_index(), seq.phase()));
        }
        // Item indices cycle 0,1,2,0,1,2,...
        let mut dedup = Vec::new();
        for (idx, _) in &observed {
            if dedup.last() != Some(idx) {
                dedup.push(*idx);
            }
        }
        assert!(dedup.starts_with(&[0, 1, 2, 0, 1, 2]));
    }

    #[test]
    fn visible_text_is_always_a_prefix_of_current_item() {
        let mut opts = options(&["hello", "world"]);
        opts.loop_items = true;
        let mut seq = TypingSequencer::new(opts);
        seq.start();
        for _ in 0..200 {
            seq.on_phase_timer();
            let item = &seq.options().items[seq.item_index()];
            assert!(
                item.starts_with(seq.visible_text()),
                "{:?} is not a prefix of {:?}",
                seq.visible_text(),
                item
            );
        }
    }

    #[test]
    fn unicode_items_type_per_scalar_value() {
        let mut seq = TypingSequencer::new(options(&["héllo"]));
        let trace = run_to_completion(&mut seq);
        assert_eq!(trace, vec!["", "h", "hé", "hél", "héll", "héllo"]);
    }

    #[test]
    fn empty_string_item_completes_immediately() {
        let mut seq = TypingSequencer::new(options(&[""]));
        let trace = run_to_completion(&mut seq);
        assert_eq!(trace, vec!["", ""]);
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn reconfigure_resets_to_start() {
        let mut opts = options(&["abc", "def"]);
        opts.loop_items = true;
        let mut seq = TypingSequencer::new(opts);
        seq.start();
        for _ in 0..7 {
            seq.on_phase_timer();
        }
        assert_ne!(seq.visible_text(), "");

        let delay = seq.reconfigure(options(&["xy"]));
        assert_eq!(delay, Some(Duration::from_millis(0)));
        assert_eq!(seq.visible_text(), "");
        assert_eq!(seq.item_index(), 0);
        assert_eq!(seq.phase(), Phase::Idle);
        let trace = run_to_completion(&mut seq);
        assert_eq!(trace.last().map(String::as_str), Some("xy"));
    }

    #[test]
    fn cursor_blink_toggles_independently_of_phase() {
        let mut seq = TypingSequencer::new(options(&["ok"]));
        seq.start();
        assert!(seq.frame().cursor_visible);
        seq.on_blink_timer();
        assert!(!seq.frame().cursor_visible);
        seq.on_blink_timer();
        assert!(seq.frame().cursor_visible);
    }

    #[test]
    fn hide_cursor_while_typing_suppresses_during_active_phases() {
        let mut opts = options(&["ab", "cd"]);
        opts.loop_items = true;
        opts.hide_cursor_while_typing = true;
        let mut seq = TypingSequencer::new(opts);
        seq.start();

        seq.on_phase_timer(); // Idle -> TypingIn
        assert_eq!(seq.phase(), Phase::TypingIn);
        assert!(!seq.frame().cursor_visible);

        seq.on_phase_timer(); // "a"
        seq.on_phase_timer(); // "ab", now Pausing
        assert_eq!(seq.phase(), Phase::Pausing);
        assert!(seq.frame().cursor_visible);

        seq.on_phase_timer(); // Pausing -> Deleting
        assert!(!seq.frame().cursor_visible);
    }

    #[test]
    fn show_cursor_false_never_renders_a_cursor() {
        let mut opts = options(&["hi"]);
        opts.show_cursor = false;
        let mut seq = TypingSequencer::new(opts);
        seq.start();
        assert!(!seq.wants_blink_timer());
        let frame = seq.frame();
        assert!(!frame.show_cursor);
        assert!(!frame.cursor_visible);
    }

    #[test]
    fn text_colors_cycle_per_item() {
        let mut opts = options(&["a", "b", "c"]);
        opts.loop_items = true;
        opts.text_colors = vec!["red".into(), "green".into()];
        let mut seq = TypingSequencer::new(opts);
        seq.start();
        assert_eq!(seq.frame().color.as_deref(), Some("red"));
        // Run until the second item is active
        while seq.item_index() == 0 {
            seq.on_phase_timer();
        }
        assert_eq!(seq.frame().color.as_deref(), Some("green"));
        while seq.item_index() == 1 {
            seq.on_phase_timer();
        }
        // Third item wraps back to the first color
        assert_eq!(seq.frame().color.as_deref(), Some("red"));
    }
}
