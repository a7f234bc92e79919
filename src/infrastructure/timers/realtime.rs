//! Wall-clock timers on the tokio runtime

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::core::timer::TimerId;
use crate::infrastructure::timers::Timers;

/// One tokio task per timer; fired ids arrive on the receiver returned by
/// [`TokioTimers::new`]. Must be used from within a tokio runtime.
pub struct TokioTimers {
    fired_tx: mpsc::UnboundedSender<TimerId>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TokioTimers {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let timers = Self {
            fired_tx,
            tasks: HashMap::new(),
        };
        (timers, fired_rx)
    }

    fn replace(&mut self, timer: TimerId, task: JoinHandle<()>) {
        if let Some(previous) = self.tasks.insert(timer, task) {
            previous.abort();
        }
    }
}

impl Timers for TokioTimers {
    fn start_timeout(&mut self, timer: TimerId, delay: Duration) {
        let tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(timer);
        });
        self.replace(timer, task);
    }

    fn start_interval(&mut self, timer: TimerId, period: Duration) {
        let tx = self.fired_tx.clone();
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(timer).is_err() {
                    break;
                }
            }
        });
        self.replace(timer, task);
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(task) = self.tasks.remove(&timer) {
            task.abort();
        }
    }

    fn active(&self) -> Vec<TimerId> {
        self.tasks
            .iter()
            .filter(|(_, task)| !task.is_finished())
            .map(|(timer, _)| *timer)
            .collect()
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
