//! Scripted page sessions
//!
//! A scenario describes a page (tree, location, viewport) and a timeline of
//! host input. Running it drives the components through a [`Runtime`] on a
//! [`MemoryDocument`] and reports every executed command with the time it
//! ran, plus the final state of the page.

use std::path::Path;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, raw_event::RawEvent, timer::TimerId},
    domain::Selector,
    infrastructure::{
        config::Config,
        dom::{
            memory::{MemoryDocument, NodeSpec},
            Document,
        },
        timers::{virtual_clock::VirtualTimers, Timers},
    },
    integration::runtime::Runtime,
};

fn default_location() -> String {
    "/".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// `location.pathname` of the page
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_width: Option<f64>,
    #[serde(default)]
    pub scroll_animation_library: bool,
    /// Run until this virtual time even when the last step comes earlier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until_ms: Option<u64>,
    pub document: NodeSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Ready,
    /// Click the first element matching `selector`
    Click { selector: String },
    Scroll { y: f64 },
    /// Change the viewport width (when given) and fire a resize
    Resize {
        #[serde(default)]
        width: Option<f64>,
    },
}

/// A command together with the virtual time it ran at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedCmd {
    pub at_ms: u64,
    pub cmd: Cmd,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub components: Vec<String>,
    pub commands: Vec<TimedCmd>,
    pub elapsed_ms: u64,
    pub active_timers: Vec<TimerId>,
    pub scroll_locked: bool,
    pub document: NodeSpec,
}

impl Scenario {
    pub fn from_json5(input: &str) -> Result<Self> {
        let scenario = json5::from_str(input)?;
        Ok(scenario)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let input = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading scenario {}", path.display()))?;
        Self::from_json5(&input).wrap_err_with(|| format!("parsing scenario {}", path.display()))
    }

    fn build_document(&self) -> MemoryDocument {
        let doc = MemoryDocument::new(self.document.clone())
            .with_location(&self.location)
            .with_scroll_animation_library(self.scroll_animation_library);
        match self.viewport_width {
            Some(width) => doc.with_viewport_width(width),
            None => doc,
        }
    }

    /// Steps in time order; steps sharing a time keep their listed order
    fn sorted_steps(&self) -> Vec<Step> {
        let mut steps = self.steps.clone();
        steps.sort_by_key(|step| step.at_ms);
        steps
    }

    /// Where a run stops: `until` if given, else the scenario's own
    /// `until_ms`, else the time of the last step
    fn end_ms(&self, until: Option<u64>) -> u64 {
        until
            .or(self.until_ms)
            .unwrap_or_else(|| self.steps.iter().map(|step| step.at_ms).max().unwrap_or(0))
    }
}

/// Shared bookkeeping of the virtual and real-time runners
struct Session {
    runtime: Runtime<MemoryDocument>,
    commands: Vec<TimedCmd>,
}

impl Session {
    fn new(scenario: &Scenario, config: Config) -> Self {
        Self {
            runtime: Runtime::new(config, scenario.build_document()),
            commands: Vec::new(),
        }
    }

    fn record(&mut self, at_ms: u64, cmds: Vec<Cmd>) {
        self.commands
            .extend(cmds.into_iter().map(|cmd| TimedCmd { at_ms, cmd }));
    }

    fn timer_fired(&mut self, at_ms: u64, timer: TimerId, timers: &mut dyn Timers) {
        let cmds = self.runtime.handle(RawEvent::TimerFired { timer }, timers);
        self.record(at_ms, cmds);
    }

    fn apply(&mut self, step: &Step, timers: &mut dyn Timers) -> Result<()> {
        let raw = match &step.action {
            Action::Ready => RawEvent::Ready,
            Action::Click { selector } => {
                let parsed: Selector = selector.parse()?;
                let target = self
                    .runtime
                    .doc()
                    .select_first(None, &parsed)
                    .ok_or_else(|| eyre!("no element matches `{selector}` at {} ms", step.at_ms))?;
                RawEvent::Click { target }
            }
            Action::Scroll { y } => {
                self.runtime.doc_mut().set_scroll_y(*y);
                RawEvent::Scroll
            }
            Action::Resize { width } => {
                if let Some(width) = width {
                    self.runtime.doc_mut().set_viewport_width(*width);
                }
                RawEvent::Resize
            }
        };
        tracing::debug!("step at {} ms: {:?}", step.at_ms, step.action);
        let cmds = self.runtime.handle(raw, timers);
        self.record(step.at_ms, cmds);
        Ok(())
    }

    fn finish(self, elapsed_ms: u64, timers: &dyn Timers) -> Report {
        let mut active_timers = timers.active();
        active_timers.sort();
        let components = self
            .runtime
            .app()
            .map(|app| app.components().names())
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect();
        let scroll_locked = self.runtime.executor().is_scroll_locked();
        let document = self.runtime.doc().to_spec();
        Report {
            components,
            commands: self.commands,
            elapsed_ms,
            active_timers,
            scroll_locked,
            document,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Run `scenario` on a virtual clock up to `until` (see [`Scenario`] for
/// the default). Steps scheduled after the end are skipped.
pub fn run_scenario(scenario: &Scenario, config: Config, until: Option<u64>) -> Result<Report> {
    let end = scenario.end_ms(until);
    let mut timers = VirtualTimers::new();
    let mut session = Session::new(scenario, config);

    for step in scenario.sorted_steps() {
        if step.at_ms > end {
            tracing::warn!("skipping step at {} ms, past the end at {end} ms", step.at_ms);
            continue;
        }
        fire_until(&mut session, &mut timers, step.at_ms);
        session.apply(&step, &mut timers)?;
    }
    fire_until(&mut session, &mut timers, end);

    Ok(session.finish(end, &timers))
}

fn fire_until(session: &mut Session, timers: &mut VirtualTimers, at_ms: u64) {
    let deadline = Duration::from_millis(at_ms);
    while let Some(timer) = timers.fire_next(deadline) {
        let now = millis(timers.now());
        session.timer_fired(now, timer, timers);
    }
    timers.advance_to(deadline);
}

/// Run `scenario` against the wall clock with tokio timers
#[cfg(feature = "cli")]
pub async fn run_scenario_realtime(
    scenario: &Scenario,
    config: Config,
    until: Option<u64>,
) -> Result<Report> {
    use tokio::time::{sleep_until, Instant};

    use crate::infrastructure::timers::realtime::TokioTimers;

    let end = scenario.end_ms(until);
    let (mut timers, mut fired) = TokioTimers::new();
    let mut session = Session::new(scenario, config);
    let start = Instant::now();
    let elapsed = |start: Instant| millis(start.elapsed());

    let mut steps = scenario.sorted_steps().into_iter().filter(|step| step.at_ms <= end);
    loop {
        let next_step = steps.next();
        let due = start + Duration::from_millis(next_step.as_ref().map_or(end, |step| step.at_ms));
        loop {
            tokio::select! {
                _ = sleep_until(due) => break,
                Some(timer) = fired.recv() => {
                    session.timer_fired(elapsed(start), timer, &mut timers);
                }
            }
        }
        match next_step {
            Some(step) => session.apply(&step, &mut timers)?,
            None => break,
        }
    }

    Ok(session.finish(elapsed(start), &timers))
}
