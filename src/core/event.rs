use crate::core::timer::TimerId;
use crate::domain::NodeId;

/// A click together with its bubbling path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub target: NodeId,
    /// `target` followed by its ancestors up to the root
    pub path: Vec<NodeId>,
}

impl ClickEvent {
    /// Whether a listener on `node` would see this click
    pub fn hits(&self, node: NodeId) -> bool {
        self.path.contains(&node)
    }

    /// The innermost of `nodes` on the bubbling path
    pub fn first_hit(&self, nodes: &[NodeId]) -> Option<NodeId> {
        self.path.iter().copied().find(|node| nodes.contains(node))
    }
}

/// Events dispatched to components
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Ready,
    Click(ClickEvent),
    Scroll { y: f64 },
    Resize,
    TimerFired(TimerId),
}
