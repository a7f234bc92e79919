//! Domain types
//!
//! Plain data shared by the models, components and document backends.

pub mod node;
pub mod scroll_animation;
pub mod selector;
pub mod service;

pub use node::NodeId;
pub use scroll_animation::ScrollAnimationSettings;
pub use selector::{Compound, Selector, SelectorTarget};
pub use service::{ServiceCatalog, ServiceDetail};
