//! Browser document over `web-sys`

use std::cell::RefCell;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::domain::{NodeId, ScrollAnimationSettings, Selector};
use crate::infrastructure::dom::{slots::NodeSlots, Document};

/// The live page
///
/// Elements are interned on first sight so a [`NodeId`] stays stable while
/// the element is attached. Slots of detached elements (such as the old
/// content of a rewritten modal) are released and reused.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
    nodes: RefCell<NodeSlots<Element>>,
}

impl WebDocument {
    /// `None` outside a browser window
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            nodes: RefCell::new(NodeSlots::new()),
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn dom(&self) -> &web_sys::Document {
        &self.document
    }

    /// Handle for an event target, when it is an element
    pub fn node_for_target(&self, target: EventTarget) -> Option<NodeId> {
        target.dyn_into::<Element>().ok().map(|el| self.intern(el))
    }

    fn intern(&self, element: Element) -> NodeId {
        self.nodes.borrow_mut().intern(
            element,
            |held, new| held.is_same_node(Some(&**new)),
            |held| held.is_connected(),
        )
    }

    fn element(&self, node: NodeId) -> Option<Element> {
        self.nodes.borrow().get(node).cloned()
    }

    fn query_all(&self, scope: Option<&Element>, css: &str) -> Result<Vec<Element>, JsValue> {
        let list = match scope {
            Some(scope) => scope.query_selector_all(css)?,
            None => self.document.query_selector_all(css)?,
        };
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

impl Document for WebDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document
            .get_element_by_id(id)
            .map(|el| self.intern(el))
    }

    fn select_all(&self, scope: Option<NodeId>, selector: &Selector) -> Vec<NodeId> {
        let scope = match scope {
            Some(node) => match self.element(node) {
                Some(el) => Some(el),
                None => return vec![],
            },
            None => None,
        };
        let css = selector.to_string();
        match self.query_all(scope.as_ref(), &css) {
            Ok(elements) => elements.into_iter().map(|el| self.intern(el)).collect(),
            Err(err) => {
                tracing::warn!("querySelectorAll({css}) failed: {err:?}");
                vec![]
            }
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node)?
            .parent_element()
            .map(|el| self.intern(el))
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)?.get_attribute(name)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn client_width(&self, node: NodeId) -> f64 {
        self.element(node)
            .map_or(0.0, |el| f64::from(el.client_width()))
    }

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn body(&self) -> Option<NodeId> {
        let body: Element = self.document.body()?.into();
        Some(self.intern(body))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element(node) {
            if let Err(err) = el.class_list().add_1(class) {
                tracing::warn!("classList.add({class}) failed: {err:?}");
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element(node) {
            if let Err(err) = el.class_list().remove_1(class) {
                tracing::warn!("classList.remove({class}) failed: {err:?}");
            }
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        let Some(el) = self.element(node) else {
            return;
        };
        let Some(el) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            tracing::warn!("style {property}: {value} failed: {err:?}");
        }
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        if let Some(el) = self.element(node) {
            el.set_inner_html(html);
        }
    }

    fn scroll_to_top(&mut self, smooth: bool) -> bool {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.window.scroll_to_with_scroll_to_options(&options);
        // The browser reports the movement through its own scroll events.
        false
    }

    fn init_scroll_animations(&mut self, settings: &ScrollAnimationSettings) -> bool {
        match init_aos(&self.window, settings) {
            Ok(present) => present,
            Err(err) => {
                tracing::warn!("AOS.init failed: {err:?}");
                false
            }
        }
    }
}

/// Call `window.AOS.init({...})` when the library is loaded
fn init_aos(window: &Window, settings: &ScrollAnimationSettings) -> Result<bool, JsValue> {
    let aos = Reflect::get(window, &JsValue::from_str("AOS"))?;
    if aos.is_undefined() || aos.is_null() {
        return Ok(false);
    }
    let Ok(init) = Reflect::get(&aos, &JsValue::from_str("init"))?.dyn_into::<Function>() else {
        return Ok(false);
    };
    let options = Object::new();
    Reflect::set(&options, &"once".into(), &JsValue::from_bool(settings.once))?;
    Reflect::set(&options, &"duration".into(), &JsValue::from(settings.duration_ms))?;
    Reflect::set(&options, &"offset".into(), &JsValue::from(settings.offset_px))?;
    init.call1(&aos, &options)?;
    Ok(true)
}
