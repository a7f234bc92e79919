//! Testimonial carousel component
//!
//! Positions `.testimonial-slides` inside `.testimonial-carousel` with a
//! horizontal transform. The slide width is measured from the first
//! `.testimonial-card-slide` at mount and again on every resize.

use lazy_static::lazy_static;

use crate::{
    core::{cmd::Cmd, event::Event, timer::TimerOwner},
    domain::{Compound, NodeId, Selector},
    infrastructure::dom::Document,
    model::carousel::{Carousel, Message},
    presentation::components::Component,
};

lazy_static! {
    static ref CONTAINER: Selector = Selector::from(Compound::class("testimonial-carousel"));
    static ref TRACK: Selector = Selector::from(Compound::class("testimonial-slides"));
    static ref SLIDES: Selector = Selector::from(Compound::class("testimonial-card-slide"));
    static ref PREV: Selector = Selector::from(Compound::class("prev-slide"));
    static ref NEXT: Selector = Selector::from(Compound::class("next-slide"));
}

#[derive(Debug, Clone)]
pub struct CarouselComponent {
    track: NodeId,
    first_slide: NodeId,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    model: Carousel,
}

impl CarouselComponent {
    pub fn mount(doc: &dyn Document, autoplay_ms: u64) -> Option<Self> {
        let container = doc.select_first(None, &CONTAINER)?;
        let track = doc.select_first(Some(container), &TRACK)?;
        let slides = doc.select_all(Some(container), &SLIDES);
        let first_slide = *slides.first()?;
        Some(Self {
            track,
            first_slide,
            prev: doc.select_first(Some(container), &PREV),
            next: doc.select_first(Some(container), &NEXT),
            model: Carousel::new(slides.len(), autoplay_ms),
        })
    }

    pub fn model(&self) -> &Carousel {
        &self.model
    }

    fn measure(&mut self, doc: &dyn Document) {
        let width = doc.client_width(self.first_slide);
        self.model.update(Message::SlideWidthMeasured(width));
    }

    fn render(&self) -> Cmd {
        Cmd::set_style(
            self.track,
            "transform",
            format!("translateX(-{}px)", self.model.offset()),
        )
    }

    /// Reposition after `message`, then run the model's timer effects
    fn navigate(&mut self, message: Message) -> Vec<Cmd> {
        let effects = self.model.update(message);
        let mut cmds = vec![self.render()];
        cmds.extend(effects);
        cmds
    }
}

impl Component for CarouselComponent {
    fn name(&self) -> &'static str {
        "carousel"
    }

    fn init(&mut self, doc: &dyn Document) -> Vec<Cmd> {
        self.measure(doc);
        self.navigate(Message::Started)
    }

    fn update(&mut self, event: &Event, doc: &dyn Document) -> Vec<Cmd> {
        match event {
            Event::Click(click) if self.next.is_some_and(|next| click.hits(next)) => {
                self.navigate(Message::NextClicked)
            }
            Event::Click(click) if self.prev.is_some_and(|prev| click.hits(prev)) => {
                self.navigate(Message::PreviousClicked)
            }
            Event::TimerFired(timer) if timer.owner == TimerOwner::Carousel => {
                let before = self.model.current_index();
                self.model.update(Message::AutoplayTicked(*timer));
                if self.model.current_index() == before {
                    return vec![];
                }
                vec![self.render()]
            }
            Event::Resize => {
                self.measure(doc);
                vec![self.render()]
            }
            _ => vec![],
        }
    }

    fn dispose(&mut self) -> Vec<Cmd> {
        self.model.update(Message::Stopped)
    }
}
