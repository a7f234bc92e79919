//! Deterministic timers driven by an explicit clock

use std::time::Duration;

use crate::core::timer::TimerId;
use crate::infrastructure::timers::Timers;

#[derive(Debug, Clone)]
struct Entry {
    timer: TimerId,
    due: Duration,
    period: Option<Duration>,
    order: u64,
}

/// Timers on a virtual clock that only moves when told to
///
/// Timers due at the same instant fire in the order they were scheduled.
#[derive(Debug, Clone, Default)]
pub struct VirtualTimers {
    now: Duration,
    entries: Vec<Entry>,
    next_order: u64,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire the earliest timer due at or before `deadline`
    ///
    /// The clock moves to that timer's due time. Intervals are rescheduled
    /// one period later. Returns `None` once nothing is due before the
    /// deadline; the clock is left where the last timer fired, call
    /// [`VirtualTimers::advance_to`] to move it the rest of the way.
    pub fn fire_next(&mut self, deadline: Duration) -> Option<TimerId> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= deadline)
            .min_by_key(|(_, entry)| (entry.due, entry.order))
            .map(|(index, _)| index)?;

        let entry = self.entries.remove(index);
        self.now = self.now.max(entry.due);
        if let Some(period) = entry.period {
            let order = self.bump_order();
            self.entries.push(Entry {
                due: entry.due + period,
                order,
                ..entry
            });
        }
        Some(entry.timer)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn bump_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    fn schedule(&mut self, timer: TimerId, delay: Duration, period: Option<Duration>) {
        self.cancel(timer);
        let order = self.bump_order();
        self.entries.push(Entry {
            timer,
            due: self.now + delay,
            period,
            order,
        });
    }
}

impl Timers for VirtualTimers {
    fn start_timeout(&mut self, timer: TimerId, delay: Duration) {
        self.schedule(timer, delay, None);
    }

    fn start_interval(&mut self, timer: TimerId, period: Duration) {
        // A zero period would never let the clock reach a deadline.
        let period = period.max(Duration::from_millis(1));
        self.schedule(timer, period, Some(period));
    }

    fn cancel(&mut self, timer: TimerId) {
        self.entries.retain(|entry| entry.timer != timer);
    }

    fn active(&self) -> Vec<TimerId> {
        self.entries.iter().map(|entry| entry.timer).collect()
    }
}
