//! Off-canvas mobile menu

use lazy_static::lazy_static;

use crate::{
    core::{cmd::Cmd, event::Event},
    domain::{Compound, NodeId, Selector},
    infrastructure::dom::Document,
    model::mobile_nav::{Message, MobileNav},
    presentation::components::Component,
};

lazy_static! {
    /// `.mobile-nav ul li a`
    static ref MENU_LINKS: Selector = Selector::from(Compound::class("mobile-nav"))
        .descendant(Compound::tag("ul"))
        .descendant(Compound::tag("li"))
        .descendant(Compound::tag("a"));
}

#[derive(Debug, Clone)]
pub struct MobileNavComponent {
    panel: NodeId,
    toggle: Option<NodeId>,
    close: Option<NodeId>,
    links: Vec<NodeId>,
    model: MobileNav,
}

impl MobileNavComponent {
    pub fn mount(doc: &dyn Document) -> Option<Self> {
        let panel = doc.element_by_id("mobileNav")?;
        Some(Self {
            panel,
            toggle: doc.element_by_id("menuToggle"),
            close: doc.element_by_id("closeMobileMenu"),
            links: doc.select_all(None, &MENU_LINKS),
            model: MobileNav::default(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.model.is_open()
    }

    fn message_for(&self, event: &Event) -> Option<Message> {
        let Event::Click(click) = event else {
            return None;
        };
        if self.toggle.is_some_and(|toggle| click.hits(toggle)) {
            Some(Message::OpenRequested)
        } else if self.close.is_some_and(|close| click.hits(close)) {
            Some(Message::CloseRequested)
        } else if click.first_hit(&self.links).is_some() {
            Some(Message::LinkFollowed)
        } else {
            None
        }
    }
}

impl Component for MobileNavComponent {
    fn name(&self) -> &'static str {
        "mobile_nav"
    }

    fn update(&mut self, event: &Event, _doc: &dyn Document) -> Vec<Cmd> {
        let Some(message) = self.message_for(event) else {
            return vec![];
        };
        let was_open = self.model.is_open();
        let effects = self.model.update(message);
        let open = self.model.is_open();
        if open == was_open {
            return effects;
        }
        let mut cmds = vec![Cmd::toggle_class(self.panel, "open", open)];
        cmds.extend(effects);
        cmds
    }
}
