use std::collections::VecDeque;

use crate::{
    app::SiteApp,
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, event::Event, raw_event::RawEvent,
        translator::translate_raw_to_domain,
    },
    infrastructure::{config::Config, dom::Document, timers::Timers},
};

/// Integration point between the host and the components
///
/// Raw events are queued and processed in arrival order. Events that arrive
/// before `Ready` are dropped; the first `Ready` mounts the app. Follow-up
/// events produced while executing commands are queued behind the current
/// ones.
pub struct Runtime<D: Document> {
    config: Config,
    doc: D,
    app: Option<SiteApp>,
    executor: CmdExecutor,
    raw_event_queue: VecDeque<RawEvent>,
}

impl<D: Document> Runtime<D> {
    pub fn new(config: Config, doc: D) -> Self {
        Self {
            config,
            doc,
            app: None,
            executor: CmdExecutor::new(),
            raw_event_queue: VecDeque::new(),
        }
    }

    pub fn doc(&self) -> &D {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn app(&self) -> Option<&SiteApp> {
        self.app.as_ref()
    }

    pub fn executor(&self) -> &CmdExecutor {
        &self.executor
    }

    pub fn is_mounted(&self) -> bool {
        self.app.is_some()
    }

    /// Queue a raw event for the next [`Runtime::process`]
    pub fn send_raw_event(&mut self, raw: RawEvent) {
        self.raw_event_queue.push_back(raw);
    }

    /// Queue `raw` and process everything pending
    pub fn handle(&mut self, raw: RawEvent, timers: &mut dyn Timers) -> Vec<Cmd> {
        self.send_raw_event(raw);
        self.process(timers)
    }

    /// Drain the queue. Returns the executed commands in execution order.
    pub fn process(&mut self, timers: &mut dyn Timers) -> Vec<Cmd> {
        let mut executed = Vec::new();
        while let Some(raw) = self.raw_event_queue.pop_front() {
            if !raw.is_frequent() {
                tracing::debug!("raw event: {raw:?}");
            }
            let event = translate_raw_to_domain(raw, &self.doc);
            let cmds: Vec<Cmd> = self
                .dispatch(&event)
                .into_iter()
                .flat_map(Cmd::flatten)
                .collect();
            if cmds.is_empty() {
                continue;
            }
            let follow_ups = self
                .executor
                .execute_all(cmds.clone(), &mut self.doc, timers);
            self.raw_event_queue.extend(follow_ups);
            executed.extend(cmds);
        }
        executed
    }

    /// Tear the app down and run its teardown commands
    pub fn dispose(&mut self, timers: &mut dyn Timers) -> Vec<Cmd> {
        self.raw_event_queue.clear();
        let Some(mut app) = self.app.take() else {
            return vec![];
        };
        let cmds: Vec<Cmd> = app.dispose().into_iter().flat_map(Cmd::flatten).collect();
        self.executor.execute_all(cmds.clone(), &mut self.doc, timers);
        tracing::info!("disposed app, {} teardown command(s)", cmds.len());
        cmds
    }

    fn dispatch(&mut self, event: &Event) -> Vec<Cmd> {
        if let Some(app) = self.app.as_mut() {
            return app.update(event, &self.doc);
        }
        if !matches!(event, Event::Ready) {
            tracing::trace!("not mounted yet, dropping {event:?}");
            return vec![];
        }
        let mut app = SiteApp::mount(&self.doc, &self.config);
        let cmds = app.start(&self.doc);
        self.app = Some(app);
        cmds
    }
}
