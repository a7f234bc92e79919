pub mod memory;
pub mod slots;
#[cfg(feature = "web")]
pub mod web;

use crate::domain::{NodeId, ScrollAnimationSettings, Selector};

/// The slice of a browser document the components depend on
///
/// Lookups never fail; a missing element is `None` or an empty list and the
/// caller decides what that means. Mutations on handles that no longer
/// resolve are ignored.
pub trait Document {
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// All elements matching `selector` in document order. With a `scope`
    /// only descendants of that element are candidates, but ancestors
    /// outside the scope still take part in matching (as `querySelectorAll`).
    fn select_all(&self, scope: Option<NodeId>, selector: &Selector) -> Vec<NodeId>;

    fn select_first(&self, scope: Option<NodeId>, selector: &Selector) -> Option<NodeId> {
        self.select_all(scope, selector).into_iter().next()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId>;
    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Rendered width of the element in CSS pixels
    fn client_width(&self, node: NodeId) -> f64;

    /// `location.pathname`
    fn location_path(&self) -> String;

    /// Current vertical scroll offset
    fn scroll_y(&self) -> f64;

    fn body(&self) -> Option<NodeId>;

    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// An empty `value` clears the property
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);
    fn set_inner_html(&mut self, node: NodeId, html: &str);

    /// Returns true when the offset changed synchronously and no scroll event
    /// will be delivered by the host for it.
    fn scroll_to_top(&mut self, smooth: bool) -> bool;

    /// Returns false when the animate-on-scroll library is not loaded.
    fn init_scroll_animations(&mut self, settings: &ScrollAnimationSettings) -> bool;

    /// The click bubbling path: `node` followed by its ancestors
    fn path_to_root(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            path.push(parent);
            current = parent;
        }
        path
    }
}
