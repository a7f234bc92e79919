//! Browser entry point
//!
//! [`start`] wires the page's DOM events and timers into a [`Runtime`] over
//! the live document. Everything runs on the page's single thread; the
//! shared state is only borrowed for the duration of one event.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::{Event, EventTarget, PageTransitionEvent};

use crate::{
    core::{raw_event::RawEvent, timer::TimerId},
    infrastructure::{config::Config, dom::web::WebDocument, timers::browser::BrowserTimers},
    integration::runtime::Runtime,
};

struct Shared {
    runtime: Runtime<WebDocument>,
    timers: BrowserTimers,
}

fn dispatch(shared: &Rc<RefCell<Shared>>, raw: RawEvent) {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        tracing::warn!("re-entrant event dropped: {raw:?}");
        return;
    };
    let Shared { runtime, timers } = &mut *guard;
    runtime.handle(raw, timers);
}

fn timer_fired(shared: &Weak<RefCell<Shared>>, timer: TimerId) {
    let Some(shared) = shared.upgrade() else {
        return;
    };
    let live = match shared.try_borrow_mut() {
        Ok(mut guard) => guard.timers.fired(timer),
        Err(_) => false,
    };
    if live {
        dispatch(&shared, RawEvent::TimerFired { timer });
    }
}

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Mount the site behaviors on the current page
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let config = Config::embedded().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let doc = WebDocument::new().ok_or_else(|| JsValue::from_str("no browser window"))?;
    let window = doc.window().clone();
    let dom = doc.dom().clone();

    let shared = Rc::new_cyclic(|weak: &Weak<RefCell<Shared>>| {
        let weak = weak.clone();
        let deliver = Rc::new(move |timer: TimerId| timer_fired(&weak, timer));
        RefCell::new(Shared {
            runtime: Runtime::new(config, doc),
            timers: BrowserTimers::new(window.clone(), deliver),
        })
    });

    let on_click = Rc::clone(&shared);
    listen(&dom, "click", move |event| {
        let target = event.target().and_then(|target| {
            on_click
                .try_borrow()
                .ok()
                .and_then(|guard| guard.runtime.doc().node_for_target(target))
        });
        if let Some(target) = target {
            dispatch(&on_click, RawEvent::Click { target });
        }
    })?;

    let on_scroll = Rc::clone(&shared);
    listen(&window, "scroll", move |_| dispatch(&on_scroll, RawEvent::Scroll))?;

    let on_resize = Rc::clone(&shared);
    listen(&window, "resize", move |_| dispatch(&on_resize, RawEvent::Resize))?;

    let on_pagehide = Rc::clone(&shared);
    listen(&window, "pagehide", move |_| {
        if let Ok(mut guard) = on_pagehide.try_borrow_mut() {
            let Shared { runtime, timers } = &mut *guard;
            runtime.dispose(timers);
        }
    })?;

    // A page restored from the back-forward cache gets no DOMContentLoaded.
    let on_pageshow = Rc::clone(&shared);
    listen(&window, "pageshow", move |event| {
        let restored = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(PageTransitionEvent::persisted);
        if restored {
            dispatch(&on_pageshow, RawEvent::Ready);
        }
    })?;

    if dom.ready_state() == "loading" {
        let on_ready = Rc::clone(&shared);
        listen(&dom, "DOMContentLoaded", move |_| dispatch(&on_ready, RawEvent::Ready))?;
    } else {
        dispatch(&shared, RawEvent::Ready);
    }
    Ok(())
}
