use serde::{Deserialize, Serialize};

use crate::core::timer::TimerId;
use crate::domain::{NodeId, ScrollAnimationSettings};

/// Elm-like command definitions
///
/// Components never touch the document or the clock directly; they describe
/// the effect they want and the runtime executes it. Node-bound commands are
/// produced by presentation components, page-global ones (scroll lock, timers)
/// by the models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args", rename_all = "snake_case")]
pub enum Cmd {
    // Element state
    AddClass {
        node: NodeId,
        class: String,
    },
    RemoveClass {
        node: NodeId,
        class: String,
    },
    SetStyle {
        node: NodeId,
        property: String,
        value: String,
    },
    SetInnerHtml {
        node: NodeId,
        html: String,
    },

    // Page-level state
    LockScroll,
    UnlockScroll,
    ScrollToTop {
        smooth: bool,
    },
    InitScrollAnimations(ScrollAnimationSettings),

    // Timers
    StartTimeout {
        timer: TimerId,
        delay_ms: u64,
    },
    StartInterval {
        timer: TimerId,
        period_ms: u64,
    },
    CancelTimer {
        timer: TimerId,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    None,
}

impl Cmd {
    pub fn add_class(node: NodeId, class: &str) -> Self {
        Cmd::AddClass {
            node,
            class: class.to_string(),
        }
    }

    pub fn remove_class(node: NodeId, class: &str) -> Self {
        Cmd::RemoveClass {
            node,
            class: class.to_string(),
        }
    }

    /// Add or remove `class` depending on `enabled`
    pub fn toggle_class(node: NodeId, class: &str, enabled: bool) -> Self {
        if enabled {
            Cmd::add_class(node, class)
        } else {
            Cmd::remove_class(node, class)
        }
    }

    pub fn set_style(node: NodeId, property: &str, value: impl Into<String>) -> Self {
        Cmd::SetStyle {
            node,
            property: property.to_string(),
            value: value.into(),
        }
    }

    /// Flatten nested batches into execution order, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            Cmd::None => vec![],
            cmd => vec![cmd],
        }
    }
}
