#[cfg(feature = "web")]
pub mod browser;
#[cfg(feature = "cli")]
pub mod realtime;
pub mod virtual_clock;

use std::time::Duration;

use crate::core::timer::TimerId;

/// Host timer facility
///
/// Starting a timer under an id that is already active replaces it. Fired
/// timers are reported back to the runtime as `RawEvent::TimerFired`; how
/// that happens is up to the implementation.
pub trait Timers {
    fn start_timeout(&mut self, timer: TimerId, delay: Duration);
    fn start_interval(&mut self, timer: TimerId, period: Duration);
    fn cancel(&mut self, timer: TimerId);

    /// Timers that may still fire, in no particular order
    fn active(&self) -> Vec<TimerId>;
}
