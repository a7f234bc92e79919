//! Service detail modal

use std::sync::Arc;

use lazy_static::lazy_static;

use crate::{
    core::{cmd::Cmd, event::Event},
    domain::{Compound, NodeId, Selector, ServiceCatalog},
    infrastructure::dom::Document,
    model::service_modal::{Message, ServiceModal},
    presentation::components::Component,
};

lazy_static! {
    /// `.modern-card[data-service-id]`
    static ref SERVICE_CARDS: Selector =
        Selector::from(Compound::class("modern-card").with_attribute("data-service-id"));
}

/// Opens `#serviceModal` with the detail of the clicked card
///
/// The detail region `#modalContentDetail` is rewritten on every open. A click
/// on the modal element itself (the backdrop around its content) closes it,
/// as does `#closeModal`.
#[derive(Debug, Clone)]
pub struct ServiceModalComponent {
    modal: NodeId,
    detail: NodeId,
    close: Option<NodeId>,
    cards: Vec<NodeId>,
    model: ServiceModal,
}

impl ServiceModalComponent {
    pub fn mount(doc: &dyn Document, catalog: Arc<ServiceCatalog>) -> Option<Self> {
        let modal = doc.element_by_id("serviceModal")?;
        let detail = doc.element_by_id("modalContentDetail")?;
        Some(Self {
            modal,
            detail,
            close: doc.element_by_id("closeModal"),
            cards: doc.select_all(None, &SERVICE_CARDS),
            model: ServiceModal::new(catalog),
        })
    }

    pub fn model(&self) -> &ServiceModal {
        &self.model
    }

    fn message_for(&self, event: &Event, doc: &dyn Document) -> Option<Message> {
        let Event::Click(click) = event else {
            return None;
        };
        if self.close.is_some_and(|close| click.hits(close)) {
            return Some(Message::CloseClicked);
        }
        if click.target == self.modal {
            return Some(Message::OverlayClicked);
        }
        let card = click.first_hit(&self.cards)?;
        let service_id = doc.attribute(card, "data-service-id")?;
        Some(Message::CardClicked { service_id })
    }
}

impl Component for ServiceModalComponent {
    fn name(&self) -> &'static str {
        "service_modal"
    }

    fn update(&mut self, event: &Event, doc: &dyn Document) -> Vec<Cmd> {
        let Some(message) = self.message_for(event, doc) else {
            return vec![];
        };
        let shown_before = self.model.current().map(|detail| detail.id.clone());
        let effects = self.model.update(message);

        let mut cmds = Vec::with_capacity(effects.len() + 2);
        match self.model.current() {
            Some(detail) if shown_before.as_deref() != Some(detail.id.as_str()) => {
                cmds.push(Cmd::SetInnerHtml {
                    node: self.detail,
                    html: detail.render_html(),
                });
                cmds.push(Cmd::add_class(self.modal, "open"));
            }
            None if shown_before.is_some() => cmds.push(Cmd::remove_class(self.modal, "open")),
            _ => {}
        }
        cmds.extend(effects);
        cmds
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::event::ClickEvent;
    use crate::domain::ServiceDetail;
    use crate::infrastructure::dom::memory::{MemoryDocument, NodeSpec};

    fn catalog() -> Arc<ServiceCatalog> {
        Arc::new(
            vec![
                ServiceDetail::new("fm-dm", "Precision FM/DM Floors (Superflat)", "<p>Laser screed.</p>"),
                ServiceDetail::new("overlay", "Decorative Overlays", "<p>Microtopping.</p>"),
            ]
            .into_iter()
            .collect(),
        )
    }

    fn card(id: &str) -> NodeSpec {
        NodeSpec::new("div")
            .class("modern-card")
            .attr("data-service-id", id)
            .child(NodeSpec::new("h4").class(id))
    }

    fn page() -> MemoryDocument {
        MemoryDocument::new(NodeSpec::new("body").children([
            NodeSpec::new("section").children([card("fm-dm"), card("overlay"), card("asphalt")]),
            NodeSpec::new("div").class("modern-card").id("plain-card"),
            NodeSpec::new("div").id("serviceModal").child(
                NodeSpec::new("div").class("modal-content").children([
                    NodeSpec::new("span").id("closeModal"),
                    NodeSpec::new("div").id("modalContentDetail"),
                ]),
            ),
        ]))
    }

    fn click(doc: &MemoryDocument, target: NodeId) -> Event {
        Event::Click(ClickEvent {
            target,
            path: doc.path_to_root(target),
        })
    }

    fn heading(doc: &MemoryDocument, id: &str) -> NodeId {
        doc.select_first(None, &Selector::from(Compound::tag("h4").and_class(id)))
            .expect("card heading")
    }

    #[test]
    fn test_card_click_opens_detail() {
        let doc = page();
        let modal = doc.element_by_id("serviceModal").expect("modal");
        let detail = doc.element_by_id("modalContentDetail").expect("detail");
        let mut component = ServiceModalComponent::mount(&doc, catalog()).expect("mounted");

        assert_eq!(
            component.update(&click(&doc, heading(&doc, "fm-dm")), &doc),
            vec![
                Cmd::SetInnerHtml {
                    node: detail,
                    html: "<h3>Precision FM/DM Floors (Superflat)</h3><p>Laser screed.</p>".to_string(),
                },
                Cmd::add_class(modal, "open"),
                Cmd::LockScroll,
            ]
        );
        assert!(component.model().is_open());
    }

    #[test]
    fn test_unknown_and_plain_cards_are_ignored() {
        let doc = page();
        let plain = doc.element_by_id("plain-card").expect("plain card");
        let mut component = ServiceModalComponent::mount(&doc, catalog()).expect("mounted");

        assert!(component.update(&click(&doc, heading(&doc, "asphalt")), &doc).is_empty());
        assert!(component.update(&click(&doc, plain), &doc).is_empty());
        assert!(!component.model().is_open());
    }

    #[test]
    fn test_close_button_and_overlay() {
        let doc = page();
        let modal = doc.element_by_id("serviceModal").expect("modal");
        let close = doc.element_by_id("closeModal").expect("close");
        let detail = doc.element_by_id("modalContentDetail").expect("detail");
        let mut component = ServiceModalComponent::mount(&doc, catalog()).expect("mounted");

        component.update(&click(&doc, heading(&doc, "overlay")), &doc);
        assert_eq!(
            component.update(&click(&doc, close), &doc),
            vec![Cmd::remove_class(modal, "open"), Cmd::UnlockScroll]
        );
        assert!(component.update(&click(&doc, close), &doc).is_empty());

        component.update(&click(&doc, heading(&doc, "overlay")), &doc);
        // Clicks inside the content box keep the modal open
        assert!(component.update(&click(&doc, detail), &doc).is_empty());
        assert_eq!(
            component.update(&click(&doc, modal), &doc),
            vec![Cmd::remove_class(modal, "open"), Cmd::UnlockScroll]
        );
    }

    #[test]
    fn test_missing_detail_region_is_inert() {
        let doc = MemoryDocument::new(NodeSpec::new("body").child(NodeSpec::new("div").id("serviceModal")));
        assert!(ServiceModalComponent::mount(&doc, catalog()).is_none());
    }
}
