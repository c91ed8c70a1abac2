//! Time source abstraction for supporting both real-time and simulated time.
//!
//! This module provides a trait-based abstraction that allows the engine to
//! run against either the real monotonic clock or a virtual clock for testing
//! and the `simulate` command. Time is expressed as a [`Duration`] elapsed
//! since the source was created, which is all the scheduler ever needs.

use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: Lazy<RwLock<Arc<dyn TimeSource>>> =
    Lazy::new(|| RwLock::new(Arc::new(RealTimeSource::new())));

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Elapsed time since this source was created
    fn now(&self) -> Duration;

    /// Sleep for the specified duration (or simulate it)
    fn sleep(&self, duration: Duration);

    /// Check if this is a simulated time source
    fn is_simulated(&self) -> bool;

    /// Check if simulation has ended (always false for real time)
    fn is_ended(&self) -> bool {
        false
    }
}

/// Real-time implementation backed by the monotonic clock
pub struct RealTimeSource {
    start: Instant,
}

impl RealTimeSource {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RealTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// Simulated time source for testing and time-accelerated execution.
///
/// Two modes:
/// - Fast-forward (multiplier = 0.0): `sleep` advances the virtual clock
///   instantly by the requested duration
/// - Linear acceleration: `sleep` blocks for `duration / multiplier` of real
///   time before advancing the virtual clock
///
/// The virtual clock is capped at `end`; once reached, `is_ended` reports
/// true and further sleeps advance nothing.
pub struct SimulatedTimeSource {
    /// Virtual end of the simulation, as elapsed time from zero
    end: Duration,
    /// Time acceleration factor; 0.0 means fast-forward
    multiplier: f64,
    /// Current virtual elapsed time
    current: Mutex<Duration>,
}

impl SimulatedTimeSource {
    /// Create a simulated source covering `end` of virtual time.
    ///
    /// `multiplier` is the virtual-seconds-per-real-second rate; 0.0 selects
    /// fast-forward mode. Negative values are treated as fast-forward.
    pub fn new(end: Duration, multiplier: f64) -> Self {
        Self {
            end,
            multiplier: if multiplier <= 0.0 { 0.0 } else { multiplier },
            current: Mutex::new(Duration::ZERO),
        }
    }

    fn advance(&self, duration: Duration) {
        let mut current = self.current.lock().unwrap();
        *current = (*current + duration).min(self.end);
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> Duration {
        *self.current.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        if self.multiplier > 0.0 {
            let real = duration.as_secs_f64() / self.multiplier;
            if real > 0.0 {
                std::thread::sleep(Duration::from_secs_f64(real));
            }
        }
        self.advance(duration);
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn is_ended(&self) -> bool {
        *self.current.lock().unwrap() >= self.end
    }
}

/// Install a time source, replacing the current one.
///
/// Call at startup before any timers are armed. Tests that install a
/// simulated source must serialize on this global.
pub fn install(source: Arc<dyn TimeSource>) {
    *TIME_SOURCE.write().unwrap() = source;
}

/// Reset the global time source to real time.
///
/// Intended for tests that installed a simulated source.
#[cfg(any(test, feature = "testing-support"))]
pub fn reset_to_real() {
    install(Arc::new(RealTimeSource::new()));
}

/// Check if the time source has been touched at all
pub fn is_initialized() -> bool {
    Lazy::get(&TIME_SOURCE).is_some()
}

/// Get the current elapsed time from the global time source
pub fn now() -> Duration {
    TIME_SOURCE.read().unwrap().now()
}

/// Sleep for the specified duration using the global time source
pub fn sleep(duration: Duration) {
    let source = TIME_SOURCE.read().unwrap().clone();
    source.sleep(duration);
}

/// Check if we're running in simulation mode
pub fn is_simulated() -> bool {
    TIME_SOURCE.read().unwrap().is_simulated()
}

/// Check if simulation has reached its end time (always false for real time)
pub fn simulation_ended() -> bool {
    TIME_SOURCE.read().unwrap().is_ended()
}
