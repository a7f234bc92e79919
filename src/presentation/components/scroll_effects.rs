use crate::{
    core::{cmd::Cmd, event::Event},
    domain::NodeId,
    infrastructure::dom::Document,
    model::scroll_effects::{Message, ScrollEffects, ScrollThresholds},
    presentation::components::Component,
};

/// Header styling and the back-to-top button
///
/// `#main-header` gets `header-visible` and `#back-to-top` gets `show` past
/// their thresholds. Either element may be missing on its own. Mounting
/// writes both classes from the current offset, whatever the markup had;
/// after that only flips are emitted.
#[derive(Debug, Clone)]
pub struct ScrollEffectsComponent {
    header: Option<NodeId>,
    back_to_top: Option<NodeId>,
    model: ScrollEffects,
}

impl ScrollEffectsComponent {
    pub fn mount(doc: &dyn Document, thresholds: ScrollThresholds) -> Option<Self> {
        let header = doc.element_by_id("main-header");
        let back_to_top = doc.element_by_id("back-to-top");
        if header.is_none() && back_to_top.is_none() {
            return None;
        }
        Some(Self {
            header,
            back_to_top,
            model: ScrollEffects::new(thresholds),
        })
    }

    pub fn model(&self) -> &ScrollEffects {
        &self.model
    }

    /// Both states as commands, regardless of what changed
    fn render(&self) -> Vec<Cmd> {
        let mut cmds = Vec::with_capacity(2);
        if let Some(header) = self.header {
            cmds.push(Cmd::toggle_class(header, "header-visible", self.model.header_visible()));
        }
        if let Some(button) = self.back_to_top {
            cmds.push(Cmd::toggle_class(button, "show", self.model.back_to_top_visible()));
        }
        cmds
    }

    fn scrolled(&mut self, y: f64) -> Vec<Cmd> {
        let header_before = self.model.header_visible();
        let back_to_top_before = self.model.back_to_top_visible();
        let mut cmds = self.model.update(Message::Scrolled { y });

        if let Some(header) = self.header {
            let visible = self.model.header_visible();
            if visible != header_before {
                cmds.push(Cmd::toggle_class(header, "header-visible", visible));
            }
        }
        if let Some(button) = self.back_to_top {
            let visible = self.model.back_to_top_visible();
            if visible != back_to_top_before {
                cmds.push(Cmd::toggle_class(button, "show", visible));
            }
        }
        cmds
    }
}

impl Component for ScrollEffectsComponent {
    fn name(&self) -> &'static str {
        "scroll_effects"
    }

    fn init(&mut self, doc: &dyn Document) -> Vec<Cmd> {
        let mut cmds = self.model.update(Message::Scrolled { y: doc.scroll_y() });
        cmds.extend(self.render());
        cmds
    }

    fn update(&mut self, event: &Event, _doc: &dyn Document) -> Vec<Cmd> {
        match event {
            Event::Scroll { y } => self.scrolled(*y),
            Event::Click(click) if self.back_to_top.is_some_and(|button| click.hits(button)) => {
                self.model.update(Message::BackToTopClicked)
            }
            _ => vec![],
        }
    }
}
