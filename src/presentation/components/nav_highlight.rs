//! Marks the navigation links that point at the current page

use lazy_static::lazy_static;

use crate::{
    core::{cmd::Cmd, event::Event},
    domain::{Compound, NodeId, Selector},
    infrastructure::dom::Document,
    model::nav_highlight::NavHighlight,
    presentation::components::Component,
};

lazy_static! {
    /// `.navbar a, .mobile-nav a`
    static ref NAV_LINKS: Selector = Selector::from(Compound::class("navbar"))
        .descendant(Compound::tag("a"))
        .or(Selector::from(Compound::class("mobile-nav")).descendant(Compound::tag("a")));
}

#[derive(Debug, Clone)]
pub struct NavHighlightComponent {
    links: Vec<NodeId>,
    model: NavHighlight,
}

impl NavHighlightComponent {
    pub fn mount(doc: &dyn Document, home_page: &str) -> Option<Self> {
        let links = doc.select_all(None, &NAV_LINKS);
        if links.is_empty() {
            return None;
        }
        Some(Self {
            links,
            model: NavHighlight::new(&doc.location_path(), home_page),
        })
    }

    pub fn current_page(&self) -> &str {
        self.model.current()
    }
}

impl Component for NavHighlightComponent {
    fn name(&self) -> &'static str {
        "nav_highlight"
    }

    fn init(&mut self, doc: &dyn Document) -> Vec<Cmd> {
        self.links
            .iter()
            .map(|&link| {
                let href = doc.attribute(link, "href");
                Cmd::toggle_class(link, "active", self.model.is_active(href.as_deref()))
            })
            .collect()
    }

    fn update(&mut self, _event: &Event, _doc: &dyn Document) -> Vec<Cmd> {
        vec![]
    }
}
