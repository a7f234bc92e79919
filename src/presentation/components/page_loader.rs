//! Load splash component
//!
//! Binds [`PageLoader`] to `#page-loader`: the `Fading` phase adds the
//! `fade-out` class, `Hidden` sets `display: none`.

use crate::{
    core::{cmd::Cmd, event::Event},
    domain::NodeId,
    infrastructure::{config::PageLoaderConfig, dom::Document},
    model::page_loader::{LoaderPhase, Message, PageLoader},
    presentation::components::Component,
};

#[derive(Debug, Clone)]
pub struct PageLoaderComponent {
    overlay: NodeId,
    model: PageLoader,
}

impl PageLoaderComponent {
    pub fn mount(doc: &dyn Document, config: &PageLoaderConfig) -> Option<Self> {
        let overlay = doc.element_by_id("page-loader")?;
        Some(Self {
            overlay,
            model: PageLoader::new(config.delay_ms, config.fade_ms),
        })
    }

    pub fn phase(&self) -> LoaderPhase {
        self.model.phase()
    }

    fn render(&self, before: LoaderPhase) -> Vec<Cmd> {
        match (before, self.model.phase()) {
            (LoaderPhase::Visible, LoaderPhase::Fading) => {
                vec![Cmd::add_class(self.overlay, "fade-out")]
            }
            (LoaderPhase::Fading, LoaderPhase::Hidden) => {
                vec![Cmd::set_style(self.overlay, "display", "none")]
            }
            _ => vec![],
        }
    }
}

impl Component for PageLoaderComponent {
    fn name(&self) -> &'static str {
        "page_loader"
    }

    fn init(&mut self, _doc: &dyn Document) -> Vec<Cmd> {
        self.model.update(Message::Started)
    }

    fn update(&mut self, event: &Event, _doc: &dyn Document) -> Vec<Cmd> {
        let Event::TimerFired(timer) = event else {
            return vec![];
        };
        let before = self.model.phase();
        let effects = self.model.update(Message::TimerFired(*timer));
        let mut cmds = self.render(before);
        cmds.extend(effects);
        cmds
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::timer::{TimerId, TimerOwner};
    use crate::infrastructure::dom::memory::{MemoryDocument, NodeSpec};

    #[test]
    fn test_missing_overlay_is_inert() {
        let doc = MemoryDocument::new(NodeSpec::new("body"));
        assert!(PageLoaderComponent::mount(&doc, &PageLoaderConfig::default()).is_none());
    }

    #[test]
    fn test_fade_then_hide() {
        let doc = MemoryDocument::new(NodeSpec::new("body").child(NodeSpec::new("div").id("page-loader")));
        let overlay = doc.element_by_id("page-loader").expect("overlay exists");
        let mut loader =
            PageLoaderComponent::mount(&doc, &PageLoaderConfig::default()).expect("mounted");

        let delay = TimerId::new(TimerOwner::PageLoader, 0);
        let fade = TimerId::new(TimerOwner::PageLoader, 1);
        assert_eq!(
            loader.init(&doc),
            vec![Cmd::StartTimeout {
                timer: delay,
                delay_ms: 300
            }]
        );

        assert_eq!(
            loader.update(&Event::TimerFired(delay), &doc),
            vec![
                Cmd::add_class(overlay, "fade-out"),
                Cmd::StartTimeout {
                    timer: fade,
                    delay_ms: 500
                },
            ]
        );
        assert_eq!(loader.phase(), LoaderPhase::Fading);

        assert_eq!(
            loader.update(&Event::TimerFired(fade), &doc),
            vec![Cmd::set_style(overlay, "display", "none")]
        );
        assert_eq!(loader.phase(), LoaderPhase::Hidden);
    }

    #[test]
    fn test_unrelated_events_render_nothing() {
        let doc = MemoryDocument::new(NodeSpec::new("div").id("page-loader"));
        let mut loader =
            PageLoaderComponent::mount(&doc, &PageLoaderConfig::default()).expect("mounted");
        loader.init(&doc);
        assert!(loader.update(&Event::Scroll { y: 10.0 }, &doc).is_empty());
        let carousel_tick = TimerId::new(TimerOwner::Carousel, 0);
        assert!(loader.update(&Event::TimerFired(carousel_tick), &doc).is_empty());
        assert_eq!(loader.phase(), LoaderPhase::Visible);
    }
}
