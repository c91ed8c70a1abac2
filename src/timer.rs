//! Deadline table backing the animation schedulers.
//!
//! The state machines in `typing` and `rotation` are pure transition
//! functions; this module owns the "when". Each logical timer is identified
//! by a [`TimerId`] and holds at most one pending deadline: arming an already
//! armed id replaces its deadline, so no two deadlines for the same id are
//! ever live simultaneously. Cancellation removes the entry outright, which
//! guarantees a cancelled timer never fires, and cancelling is idempotent.
//!
//! The table is clock-free: callers pass in the current elapsed time from
//! the active [`crate::time_source`], which keeps this module trivially
//! testable.

use std::time::Duration;

/// Identity of a logical timer owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerId {
    /// The single phase timer of the typing sequencer
    TypingPhase,
    /// The fixed-period cursor blink toggle
    CursorBlink,
    /// The slide rotation autoplay interval
    SlideAutoplay,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: TimerId,
    deadline: Duration,
    /// Arm sequence number, breaks deadline ties in scheduling order
    seq: u64,
}

/// Table of pending one-shot deadlines.
///
/// Repeating timers are expressed by re-arming from the fired callback, which
/// is how the engine keeps autoplay and blink periodic.
#[derive(Debug, Default)]
pub struct Timers {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `id` to fire at `now + delay`, replacing any pending deadline
    /// for the same id.
    pub fn arm(&mut self, id: TimerId, now: Duration, delay: Duration) {
        self.cancel(id);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            id,
            deadline: now.saturating_add(delay),
            seq,
        });
    }

    /// Cancel the pending deadline for `id`, if any. Idempotent.
    pub fn cancel(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }

    /// Cancel every pending deadline. Idempotent.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    /// Whether `id` currently has a pending deadline.
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// The earliest pending deadline, if any timer is armed.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Remove and return every timer due at `now` with its deadline, ordered
    /// by deadline and, on ties, by the order in which they were armed.
    ///
    /// The deadline is returned so repeating timers can re-arm relative to
    /// the scheduled instant rather than the (possibly late) firing instant,
    /// which keeps their cadence anchored to the original schedule.
    pub fn fire_due(&mut self, now: Duration) -> Vec<(TimerId, Duration)> {
        let mut due: Vec<Entry> = self
            .entries
            .iter()
            .copied()
            .filter(|e| e.deadline <= now)
            .collect();
        self.entries.retain(|e| e.deadline > now);
        due.sort_by_key(|e| (e.deadline, e.seq));
        due.into_iter().map(|e| (e.id, e.deadline)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut timers = Timers::new();
        timers.arm(TimerId::SlideAutoplay, ms(0), ms(50));
        timers.arm(TimerId::TypingPhase, ms(0), ms(10));
        assert_eq!(timers.next_deadline(), Some(ms(10)));
        assert_eq!(
            timers.fire_due(ms(50)),
            vec![
                (TimerId::TypingPhase, ms(10)),
                (TimerId::SlideAutoplay, ms(50)),
            ]
        );
        assert!(timers.next_deadline().is_none());
    }

    #[test]
    fn ties_fire_in_arm_order() {
        let mut timers = Timers::new();
        timers.arm(TimerId::CursorBlink, ms(0), ms(20));
        timers.arm(TimerId::TypingPhase, ms(0), ms(20));
        assert_eq!(
            timers.fire_due(ms(20)),
            vec![
                (TimerId::CursorBlink, ms(20)),
                (TimerId::TypingPhase, ms(20)),
            ]
        );
    }

    #[test]
    fn rearm_replaces_pending_deadline() {
        let mut timers = Timers::new();
        timers.arm(TimerId::TypingPhase, ms(0), ms(10));
        timers.arm(TimerId::TypingPhase, ms(5), ms(100));
        assert!(timers.fire_due(ms(10)).is_empty());
        assert_eq!(timers.next_deadline(), Some(ms(105)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        timers.arm(TimerId::SlideAutoplay, ms(0), ms(10));
        timers.cancel(TimerId::SlideAutoplay);
        assert!(timers.fire_due(ms(1000)).is_empty());
        // cancel on an empty table is a no-op
        timers.cancel(TimerId::SlideAutoplay);
        timers.cancel_all();
        timers.cancel_all();
    }

    #[test]
    fn undue_timers_stay_armed() {
        let mut timers = Timers::new();
        timers.arm(TimerId::TypingPhase, ms(0), ms(10));
        timers.arm(TimerId::CursorBlink, ms(0), ms(500));
        assert_eq!(timers.fire_due(ms(10)), vec![(TimerId::TypingPhase, ms(10))]);
        assert!(timers.is_armed(TimerId::CursorBlink));
    }

    #[test]
    fn late_fire_reports_the_scheduled_deadline() {
        let mut timers = Timers::new();
        timers.arm(TimerId::SlideAutoplay, ms(0), ms(100));
        // Fired 40ms late; the reported deadline is still the scheduled one,
        // so a caller re-arming from it stays on the original cadence
        assert_eq!(
            timers.fire_due(ms(140)),
            vec![(TimerId::SlideAutoplay, ms(100))]
        );
    }
}
