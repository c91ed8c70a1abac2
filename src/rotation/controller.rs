//! The slide rotation state machine itself.

use std::time::Duration;

use super::{RotationOptions, Slide};

/// Advances an index over a fixed list of slides on an interval, pausable by
/// the reduced-motion preference, with manual next/prev/jump operations.
///
/// The reduced-motion preference is captured once at construction and holds
/// for the lifetime of the instance; it is re-evaluated only when a new
/// controller is built (or this one is reconfigured, which keeps the captured
/// preference and recomputes only the slide-count condition).
#[derive(Debug)]
pub struct RotationController {
    options: RotationOptions,
    active_index: usize,
    /// Captured once; autoplay is permanently off when true
    reduced_motion: bool,
}

impl RotationController {
    pub fn new(options: RotationOptions, reduced_motion: bool) -> Self {
        Self {
            options,
            active_index: 0,
            reduced_motion,
        }
    }

    /// Whether the automatic advance timer should run.
    ///
    /// Autoplay requires motion to be allowed and more than one slide;
    /// rotating a single slide would be a timer with no visible effect.
    pub fn autoplay_enabled(&self) -> bool {
        !self.reduced_motion && self.options.slides.len() > 1
    }

    /// The autoplay cadence, or `None` when no timer should be armed.
    pub fn autoplay_interval(&self) -> Option<Duration> {
        self.autoplay_enabled().then_some(self.options.interval)
    }

    /// Handle an expired autoplay timer: advance to the next slide.
    /// The engine re-arms on [`autoplay_interval`](Self::autoplay_interval),
    /// keeping ticks on the original cadence.
    pub fn on_timer(&mut self) {
        self.advance(1);
    }

    /// Manually advance to the next slide, wrapping around.
    /// Does not reset or extend the autoplay timer.
    pub fn next(&mut self) {
        self.advance(1);
    }

    /// Manually step back to the previous slide, wrapping around.
    /// Does not reset or extend the autoplay timer.
    pub fn prev(&mut self) {
        let n = self.options.slides.len();
        if n > 0 {
            self.active_index = (self.active_index + n - 1) % n;
        }
    }

    /// Jump directly to slide `index`. Out-of-range values clamp to 0.
    pub fn go_to(&mut self, index: usize) {
        if index < self.options.slides.len() {
            self.active_index = index;
        } else {
            self.active_index = 0;
        }
    }

    /// Replace the slide list and interval.
    ///
    /// Keeps the active index when it is still valid, otherwise resets to 0.
    /// The captured reduced-motion preference carries over; the caller must
    /// cancel and re-arm the autoplay timer around this call.
    pub fn reconfigure(&mut self, options: RotationOptions) {
        self.options = options;
        if self.active_index >= self.options.slides.len() {
            self.active_index = 0;
        }
    }

    fn advance(&mut self, by: usize) {
        let n = self.options.slides.len();
        if n > 0 {
            self.active_index = (self.active_index + by) % n;
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The currently active slide, `None` for an empty slide list.
    pub fn active_slide(&self) -> Option<&Slide> {
        self.options.slides.get(self.active_index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.options.slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide {
                path: format!("slide-{i}.jpg"),
                alt: format!("slide {i}"),
                attribution: None,
            })
            .collect()
    }

    fn controller(n: usize, reduced_motion: bool) -> RotationController {
        RotationController::new(
            RotationOptions {
                slides: slides(n),
                interval: Duration::from_millis(1000),
            },
            reduced_motion,
        )
    }

    #[test]
    fn single_slide_never_schedules_autoplay() {
        let ctrl = controller(1, false);
        assert!(!ctrl.autoplay_enabled());
        assert_eq!(ctrl.autoplay_interval(), None);
        assert_eq!(ctrl.active_index(), 0);
    }

    #[test]
    fn reduced_motion_disables_autoplay() {
        let ctrl = controller(5, true);
        assert!(!ctrl.autoplay_enabled());
        assert_eq!(ctrl.autoplay_interval(), None);
    }

    #[test]
    fn ticks_advance_modulo_slide_count() {
        let mut ctrl = controller(3, false);
        for k in 1..=7 {
            ctrl.on_timer();
            assert_eq!(ctrl.active_index(), k % 3);
        }
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut ctrl = controller(3, false);
        ctrl.prev();
        assert_eq!(ctrl.active_index(), 2);
        ctrl.next();
        assert_eq!(ctrl.active_index(), 0);
        ctrl.next();
        ctrl.next();
        ctrl.next();
        assert_eq!(ctrl.active_index(), 0);
    }

    #[test]
    fn go_to_clamps_out_of_range_to_zero() {
        let mut ctrl = controller(3, false);
        ctrl.go_to(2);
        assert_eq!(ctrl.active_index(), 2);
        ctrl.go_to(99);
        assert_eq!(ctrl.active_index(), 0);
    }

    #[test]
    fn empty_slide_list_is_inert() {
        let mut ctrl = controller(0, false);
        assert!(!ctrl.autoplay_enabled());
        ctrl.next();
        ctrl.prev();
        ctrl.go_to(4);
        assert_eq!(ctrl.active_index(), 0);
        assert!(ctrl.active_slide().is_none());
    }

    #[test]
    fn shrinking_slide_list_resets_out_of_range_index() {
        let mut ctrl = controller(4, false);
        ctrl.go_to(3);
        ctrl.reconfigure(RotationOptions {
            slides: slides(2),
            interval: Duration::from_millis(1000),
        });
        assert_eq!(ctrl.active_index(), 0);
    }

    #[test]
    fn reconfigure_keeps_valid_index() {
        let mut ctrl = controller(4, false);
        ctrl.go_to(1);
        ctrl.reconfigure(RotationOptions {
            slides: slides(3),
            interval: Duration::from_millis(500),
        });
        assert_eq!(ctrl.active_index(), 1);
        assert_eq!(ctrl.autoplay_interval(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn reduced_motion_preference_survives_reconfigure() {
        let mut ctrl = controller(2, true);
        ctrl.reconfigure(RotationOptions {
            slides: slides(5),
            interval: Duration::from_millis(1000),
        });
        assert!(!ctrl.autoplay_enabled());
    }
}
