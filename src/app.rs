use crate::{
    core::{cmd::Cmd, event::Event},
    domain::ScrollAnimationSettings,
    infrastructure::{config::Config, dom::Document},
    presentation::components::Components,
};

/// The page's interactive features, mounted on one document
#[derive(Debug)]
pub struct SiteApp {
    components: Components,
    scroll_animation: ScrollAnimationSettings,
    started: bool,
}

impl SiteApp {
    pub fn mount(doc: &dyn Document, config: &Config) -> Self {
        Self {
            components: Components::mount(doc, config),
            scroll_animation: config.scroll_animation,
            started: false,
        }
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Commands that bring the page into its initial interactive state.
    /// Only the first call returns anything.
    pub fn start(&mut self, doc: &dyn Document) -> Vec<Cmd> {
        if self.started {
            return vec![];
        }
        self.started = true;
        let mut cmds = vec![Cmd::InitScrollAnimations(self.scroll_animation)];
        cmds.extend(self.components.init(doc));
        cmds
    }

    pub fn update(&mut self, event: &Event, doc: &dyn Document) -> Vec<Cmd> {
        if !self.started {
            return vec![];
        }
        self.components.update(event, doc)
    }

    pub fn dispose(&mut self) -> Vec<Cmd> {
        self.started = false;
        self.components.dispose()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::dom::memory::{MemoryDocument, NodeSpec};

    #[test]
    fn test_start_initializes_scroll_animations_once() {
        let doc = MemoryDocument::new(NodeSpec::new("body"));
        let mut app = SiteApp::mount(&doc, &Config::default());

        assert!(app.update(&Event::Resize, &doc).is_empty());
        assert_eq!(
            app.start(&doc),
            vec![Cmd::InitScrollAnimations(ScrollAnimationSettings::default())]
        );
        assert!(app.is_started());
        assert!(app.start(&doc).is_empty());
    }

    #[test]
    fn test_dispose_stops_updates() {
        let doc = MemoryDocument::new(NodeSpec::new("header").id("main-header"));
        let mut app = SiteApp::mount(&doc, &Config::default());
        app.start(&doc);
        assert_eq!(app.update(&Event::Scroll { y: 150.0 }, &doc).len(), 1);

        app.dispose();
        assert!(app.update(&Event::Scroll { y: 0.0 }, &doc).is_empty());
    }
}
