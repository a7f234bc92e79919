//! Component models
//!
//! Each model owns the state of one page feature, reacts to its own
//! `Message` enum in `update`, and returns the commands to run. Models never
//! touch the document.

pub mod carousel;
pub mod mobile_nav;
pub mod nav_highlight;
pub mod page_loader;
pub mod scroll_effects;
pub mod service_modal;
