//! Handle table for documents whose elements live outside Rust

use crate::domain::NodeId;

/// Maps host elements to [`NodeId`]s
///
/// An element keeps its id while it stays attached. Interning a new element
/// first releases the slots of detached ones, so the table is bounded by the
/// attached elements ever handed out rather than by every click target.
#[derive(Debug, Clone)]
pub struct NodeSlots<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for NodeSlots<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> NodeSlots<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `item`, allocating one when it is not known yet
    pub fn intern(
        &mut self,
        item: T,
        same: impl Fn(&T, &T) -> bool,
        attached: impl Fn(&T) -> bool,
    ) -> NodeId {
        let known = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|held| same(held, &item)));
        if let Some(index) = known {
            return NodeId(index);
        }

        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(|held| !attached(held)) {
                *slot = None;
            }
        }
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(item);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(item));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.slots.get(node.0).and_then(Option::as_ref)
    }

    /// Number of elements currently holding an id
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
