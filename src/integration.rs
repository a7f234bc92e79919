//! Host integration
//!
//! Drives a [`SiteApp`](crate::app::SiteApp) from raw host events: mounting on
//! ready, translation, dispatch and command execution.

pub mod runtime;
