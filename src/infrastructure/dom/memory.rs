//! In-memory document
//!
//! Backs the unit/integration tests and the `simulate` command. The tree is
//! described with [`NodeSpec`], which is also what a run reports back.

use std::collections::BTreeMap;
use std::{iter, mem};

use serde::{Deserialize, Serialize};

use crate::domain::{NodeId, ScrollAnimationSettings, Selector, SelectorTarget};
use crate::infrastructure::dom::Document;

/// Serializable description of an element and its subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    /// Fixed layout width; elements without one are as wide as the viewport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Raw markup assigned through `innerHTML`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    width: Option<f64>,
    html: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SelectorTarget for Element {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Document tree held in an arena indexed by [`NodeId`]
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
    root: NodeId,
    location_path: String,
    scroll_y: f64,
    viewport_width: f64,
    scroll_animation_library: bool,
    scroll_animations: Option<ScrollAnimationSettings>,
}

impl MemoryDocument {
    pub fn new(root: NodeSpec) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            location_path: "/".to_string(),
            scroll_y: 0.0,
            viewport_width: 1280.0,
            scroll_animation_library: false,
            scroll_animations: None,
        };
        doc.root = doc.insert(root, None);
        doc
    }

    pub fn with_location(mut self, path: &str) -> Self {
        self.location_path = path.to_string();
        self
    }

    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Pretend the animate-on-scroll library is loaded on the page
    pub fn with_scroll_animation_library(mut self, present: bool) -> Self {
        self.scroll_animation_library = present;
        self
    }

    fn insert(&mut self, spec: NodeSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut attributes = spec.attributes;
        if let Some(element_id) = spec.id {
            attributes.insert("id".to_string(), element_id);
        }
        self.nodes.push(Element {
            tag: spec.tag.to_ascii_lowercase(),
            classes: spec.classes,
            attributes,
            style: spec.style,
            width: spec.width,
            html: spec.html,
            parent,
            children: Vec::new(),
        });
        let children: Vec<NodeId> = spec
            .children
            .into_iter()
            .map(|child| self.insert(child, Some(id)))
            .collect();
        self.nodes[id.0].children = children;
        id
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    /// Attached descendants of `node` in document order, excluding `node`
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self
            .element(node)
            .map(|el| el.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(el) = self.element(current) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    fn ancestors(&self, node: NodeId) -> Vec<&Element> {
        let mut out = Vec::new();
        let mut current = self.element(node).and_then(|el| el.parent);
        while let Some(id) = current {
            let Some(el) = self.element(id) else { break };
            out.push(el);
            current = el.parent;
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        match self.element(node) {
            Some(el) => selector.matches(el, self.ancestors(node)),
            None => false,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|el| el.style.get(property))
            .map(String::as_str)
    }

    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.element(node).and_then(|el| el.html.as_deref())
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.element(node)
            .map(|el| el.classes.clone())
            .unwrap_or_default()
    }

    /// Settings the animate-on-scroll library was initialized with, if any
    pub fn scroll_animations(&self) -> Option<&ScrollAnimationSettings> {
        self.scroll_animations.as_ref()
    }

    /// Snapshot of the attached tree
    pub fn to_spec(&self) -> NodeSpec {
        self.spec_of(self.root)
    }

    fn spec_of(&self, node: NodeId) -> NodeSpec {
        let Some(el) = self.element(node) else {
            return NodeSpec::default();
        };
        let mut attributes = el.attributes.clone();
        let id = attributes.remove("id");
        NodeSpec {
            tag: el.tag.clone(),
            id,
            classes: el.classes.clone(),
            attributes,
            style: el.style.clone(),
            width: el.width,
            html: el.html.clone(),
            children: el.children.iter().map(|child| self.spec_of(*child)).collect(),
        }
    }
}

impl Document for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|node| {
                self.element(*node)
                    .and_then(|el| el.attributes.get("id"))
                    .is_some_and(|value| value == id)
            })
    }

    fn select_all(&self, scope: Option<NodeId>, selector: &Selector) -> Vec<NodeId> {
        let candidates = match scope {
            Some(scope) => self.descendants(scope),
            None => iter::once(self.root)
                .chain(self.descendants(self.root))
                .collect(),
        };
        candidates
            .into_iter()
            .filter(|node| self.matches(*node, selector))
            .collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(|el| el.parent)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.element(node)
            .and_then(|el| el.attributes.get(name))
            .cloned()
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    fn client_width(&self, node: NodeId) -> f64 {
        self.element(node)
            .and_then(|el| el.width)
            .unwrap_or(self.viewport_width)
    }

    fn location_path(&self) -> String {
        self.location_path.clone()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn body(&self) -> Option<NodeId> {
        let mut all = iter::once(self.root).chain(self.descendants(self.root));
        all.find(|node| self.element(*node).is_some_and(|el| el.tag == "body"))
            .or(Some(self.root))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.element_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(node) {
            if value.is_empty() {
                el.style.remove(property);
            } else {
                el.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        let detached = match self.element_mut(node) {
            Some(el) => {
                el.html = Some(html.to_string());
                mem::take(&mut el.children)
            }
            None => return,
        };
        for child in detached {
            if let Some(el) = self.element_mut(child) {
                el.parent = None;
            }
        }
    }

    fn scroll_to_top(&mut self, _smooth: bool) -> bool {
        let moved = self.scroll_y != 0.0;
        self.scroll_y = 0.0;
        moved
    }

    fn init_scroll_animations(&mut self, settings: &ScrollAnimationSettings) -> bool {
        if self.scroll_animation_library {
            self.scroll_animations = Some(*settings);
        }
        self.scroll_animation_library
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::Compound;

    fn page() -> MemoryDocument {
        MemoryDocument::new(
            NodeSpec::new("body").children([
                NodeSpec::new("nav").class("navbar").children([
                    NodeSpec::new("a").attr("href", "index.html"),
                    NodeSpec::new("a").attr("href", "services.html"),
                ]),
                NodeSpec::new("div")
                    .id("serviceModal")
                    .child(NodeSpec::new("div").id("modalContentDetail").child(NodeSpec::new("p"))),
            ]),
        )
    }

    #[test]
    fn test_lookup_by_id_and_selector() {
        let doc = page();
        let modal = doc.element_by_id("serviceModal").expect("modal exists");
        assert_eq!(doc.attribute(modal, "id").as_deref(), Some("serviceModal"));
        assert!(doc.element_by_id("missing").is_none());

        let selector = Selector::from(Compound::class("navbar")).descendant(Compound::tag("a"));
        let links = doc.select_all(None, &selector);
        assert_eq!(links.len(), 2);
        assert_eq!(doc.attribute(links[1], "href").as_deref(), Some("services.html"));
    }

    #[test]
    fn test_scoped_selection_excludes_scope() {
        let doc = page();
        let nav = doc
            .select_first(None, &Selector::from(Compound::class("navbar")))
            .expect("navbar exists");
        let anything = Selector::from(Compound::any());
        assert_eq!(doc.select_all(Some(nav), &anything).len(), 2);
    }

    #[test]
    fn test_class_and_style_mutation() {
        let mut doc = page();
        let modal = doc.element_by_id("serviceModal").expect("modal exists");

        doc.add_class(modal, "open");
        doc.add_class(modal, "open");
        assert_eq!(doc.classes(modal), vec!["open".to_string()]);
        doc.remove_class(modal, "open");
        assert!(!doc.has_class(modal, "open"));

        doc.set_style(modal, "overflow", "hidden");
        assert_eq!(doc.style(modal, "overflow"), Some("hidden"));
        doc.set_style(modal, "overflow", "");
        assert_eq!(doc.style(modal, "overflow"), None);
    }

    #[test]
    fn test_inner_html_detaches_children() {
        let mut doc = page();
        let detail = doc.element_by_id("modalContentDetail").expect("detail exists");
        let paragraphs = Selector::from(Compound::tag("p"));
        assert_eq!(doc.select_all(None, &paragraphs).len(), 1);

        doc.set_inner_html(detail, "<h3>Title</h3>");
        assert_eq!(doc.inner_html(detail), Some("<h3>Title</h3>"));
        assert!(doc.select_all(None, &paragraphs).is_empty());
    }

    #[test]
    fn test_path_to_root() {
        let doc = page();
        let detail = doc.element_by_id("modalContentDetail").expect("detail exists");
        let modal = doc.element_by_id("serviceModal").expect("modal exists");
        assert_eq!(doc.path_to_root(detail), vec![detail, modal, doc.root()]);
    }

    #[test]
    fn test_scroll_to_top_reports_movement() {
        let mut doc = page();
        assert!(!doc.scroll_to_top(true));
        doc.set_scroll_y(640.0);
        assert!(doc.scroll_to_top(true));
        assert_eq!(doc.scroll_y(), 0.0);
    }

    #[test]
    fn test_scroll_animation_library_presence() {
        let settings = ScrollAnimationSettings::default();

        let mut without = page();
        assert!(!without.init_scroll_animations(&settings));
        assert!(without.scroll_animations().is_none());

        let mut with = page().with_scroll_animation_library(true);
        assert!(with.init_scroll_animations(&settings));
        assert_eq!(with.scroll_animations(), Some(&settings));
    }

    #[test]
    fn test_snapshot_round_trips_through_spec() {
        let doc = page();
        let snapshot = doc.to_spec();
        assert_eq!(MemoryDocument::new(snapshot.clone()).to_spec(), snapshot);
        assert_eq!(doc.body(), Some(doc.root()));
    }
}
