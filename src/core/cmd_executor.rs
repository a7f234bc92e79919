use std::time::Duration;

use crate::core::{cmd::Cmd, raw_event::RawEvent};
use crate::infrastructure::{dom::Document, timers::Timers};

/// Applies commands to a document and a timer host
///
/// Execution is synchronous and follows emission order. Effects the host
/// would normally report back on its own (a programmatic scroll on a
/// document that moves instantly) are returned as follow-up raw events.
#[derive(Debug, Default)]
pub struct CmdExecutor {
    scroll_locked: bool,
    executed: usize,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the page body currently has its scrolling disabled
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Number of leaf commands executed so far
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Execute a list of commands in order
    pub fn execute_all(
        &mut self,
        cmds: Vec<Cmd>,
        doc: &mut dyn Document,
        timers: &mut dyn Timers,
    ) -> Vec<RawEvent> {
        let mut follow_ups = Vec::new();
        for cmd in cmds.into_iter().flat_map(Cmd::flatten) {
            follow_ups.extend(self.execute_command(&cmd, doc, timers));
        }
        follow_ups
    }

    /// Execute a single command
    pub fn execute_command(
        &mut self,
        cmd: &Cmd,
        doc: &mut dyn Document,
        timers: &mut dyn Timers,
    ) -> Vec<RawEvent> {
        tracing::trace!("execute: {cmd:?}");
        match cmd {
            Cmd::None => return vec![],
            Cmd::Batch(cmds) => return self.execute_all(cmds.clone(), doc, timers),

            Cmd::AddClass { node, class } => doc.add_class(*node, class),
            Cmd::RemoveClass { node, class } => doc.remove_class(*node, class),
            Cmd::SetStyle {
                node,
                property,
                value,
            } => doc.set_style(*node, property, value),
            Cmd::SetInnerHtml { node, html } => doc.set_inner_html(*node, html),

            Cmd::LockScroll => self.set_scroll_lock(true, doc),
            Cmd::UnlockScroll => self.set_scroll_lock(false, doc),
            Cmd::ScrollToTop { smooth } => {
                self.executed += 1;
                if doc.scroll_to_top(*smooth) {
                    return vec![RawEvent::Scroll];
                }
                return vec![];
            }
            Cmd::InitScrollAnimations(settings) => {
                if !doc.init_scroll_animations(settings) {
                    tracing::debug!("animate-on-scroll library not present, skipping init");
                }
            }

            Cmd::StartTimeout { timer, delay_ms } => {
                timers.start_timeout(*timer, Duration::from_millis(*delay_ms))
            }
            Cmd::StartInterval { timer, period_ms } => {
                timers.start_interval(*timer, Duration::from_millis(*period_ms))
            }
            Cmd::CancelTimer { timer } => timers.cancel(*timer),
        }
        self.executed += 1;
        vec![]
    }

    fn set_scroll_lock(&mut self, locked: bool, doc: &mut dyn Document) {
        self.scroll_locked = locked;
        let Some(body) = doc.body() else {
            return;
        };
        doc.set_style(body, "overflow", if locked { "hidden" } else { "" });
    }
}
