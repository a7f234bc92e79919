use crate::core::{
    event::{ClickEvent, Event},
    raw_event::RawEvent,
};
use crate::infrastructure::dom::Document;

/// Translates raw host events into component events
///
/// Reads the document (click path, scroll offset) but never mutates it.
pub fn translate_raw_to_domain(raw: RawEvent, doc: &dyn Document) -> Event {
    match raw {
        RawEvent::Ready => Event::Ready,
        RawEvent::Click { target } => Event::Click(ClickEvent {
            target,
            path: doc.path_to_root(target),
        }),
        RawEvent::Scroll => Event::Scroll { y: doc.scroll_y() },
        RawEvent::Resize => Event::Resize,
        RawEvent::TimerFired { timer } => Event::TimerFired(timer),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::timer::{TimerId, TimerOwner};
    use crate::infrastructure::dom::memory::{MemoryDocument, NodeSpec};

    fn doc() -> MemoryDocument {
        MemoryDocument::new(
            NodeSpec::new("body").child(
                NodeSpec::new("div")
                    .id("serviceModal")
                    .child(NodeSpec::new("button").id("closeModal")),
            ),
        )
    }

    #[test]
    fn test_click_resolves_path() {
        let doc = doc();
        let close = doc.element_by_id("closeModal").expect("close exists");
        let modal = doc.element_by_id("serviceModal").expect("modal exists");

        let event = translate_raw_to_domain(RawEvent::Click { target: close }, &doc);
        assert_eq!(
            event,
            Event::Click(ClickEvent {
                target: close,
                path: vec![close, modal, doc.root()],
            })
        );
    }

    #[test]
    fn test_scroll_reads_offset() {
        let mut doc = doc();
        doc.set_scroll_y(600.0);
        assert_eq!(translate_raw_to_domain(RawEvent::Scroll, &doc), Event::Scroll { y: 600.0 });
    }

    #[test]
    fn test_direct_mappings() {
        let doc = doc();
        let timer = TimerId::new(TimerOwner::Carousel, 2);
        assert_eq!(translate_raw_to_domain(RawEvent::Ready, &doc), Event::Ready);
        assert_eq!(translate_raw_to_domain(RawEvent::Resize, &doc), Event::Resize);
        assert_eq!(
            translate_raw_to_domain(RawEvent::TimerFired { timer }, &doc),
            Event::TimerFired(timer)
        );
    }
}
