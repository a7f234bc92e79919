//! `setTimeout`-based timers for the browser backend

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Function;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::core::timer::TimerId;
use crate::infrastructure::timers::Timers;

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: i32,
    period: Option<Duration>,
}

/// Every firing is a one-shot `setTimeout`; intervals re-arm themselves in
/// [`BrowserTimers::fired`]. Fired ids are handed to `deliver`, which is
/// expected to call `fired` and then dispatch the tick.
pub struct BrowserTimers {
    window: Window,
    deliver: Rc<dyn Fn(TimerId)>,
    armed: HashMap<TimerId, Armed>,
}

impl BrowserTimers {
    pub fn new(window: Window, deliver: Rc<dyn Fn(TimerId)>) -> Self {
        Self {
            window,
            deliver,
            armed: HashMap::new(),
        }
    }

    /// Book-keeping for a delivered tick. Returns false when `timer` was
    /// cancelled after the callback had already been queued.
    pub fn fired(&mut self, timer: TimerId) -> bool {
        let Some(armed) = self.armed.remove(&timer) else {
            return false;
        };
        if let Some(period) = armed.period {
            self.arm(timer, period, Some(period));
        }
        true
    }

    fn arm(&mut self, timer: TimerId, delay: Duration, period: Option<Duration>) {
        self.cancel(timer);
        let deliver = Rc::clone(&self.deliver);
        let callback = Closure::once_into_js(move || deliver(timer));
        let delay_ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref::<Function>(), delay_ms)
        {
            Ok(handle) => {
                self.armed.insert(timer, Armed { handle, period });
            }
            Err(err) => tracing::warn!("setTimeout for {timer} failed: {err:?}"),
        }
    }
}

impl Timers for BrowserTimers {
    fn start_timeout(&mut self, timer: TimerId, delay: Duration) {
        self.arm(timer, delay, None);
    }

    fn start_interval(&mut self, timer: TimerId, period: Duration) {
        let period = period.max(Duration::from_millis(1));
        self.arm(timer, period, Some(period));
    }

    fn cancel(&mut self, timer: TimerId) {
        if let Some(armed) = self.armed.remove(&timer) {
            self.window.clear_timeout_with_handle(armed.handle);
        }
    }

    fn active(&self) -> Vec<TimerId> {
        self.armed.keys().copied().collect()
    }
}
