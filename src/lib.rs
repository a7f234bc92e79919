//! # siteui - marketing site interaction layer
//!
//! The client-side behaviors of a static marketing site (load splash,
//! navigation highlighting, scroll effects, mobile menu, service modal and
//! testimonial carousel), built on an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`model`): per-feature state with a `Message` enum and `update`
//! - **Command** (`core::cmd`): side effects described as data
//! - **Components** (`presentation`): bind models to document nodes
//! - **Runtime** (`integration`): translates host events, dispatches them and
//!   executes the resulting commands against a [`Document`] and [`Timers`]
//!
//! ## Example Usage
//!
//! ```rust
//! use siteui::{
//!     infrastructure::{
//!         config::Config,
//!         dom::memory::{MemoryDocument, NodeSpec},
//!         timers::virtual_clock::VirtualTimers,
//!     },
//!     Document, RawEvent, Runtime,
//! };
//!
//! let page = NodeSpec::new("body").child(NodeSpec::new("header").id("main-header"));
//! let mut runtime = Runtime::new(Config::default(), MemoryDocument::new(page));
//! let mut timers = VirtualTimers::new();
//!
//! runtime.handle(RawEvent::Ready, &mut timers);
//! runtime.doc_mut().set_scroll_y(250.0);
//! runtime.handle(RawEvent::Scroll, &mut timers);
//!
//! let header = runtime.doc().element_by_id("main-header").unwrap();
//! assert!(runtime.doc().has_class(header, "header-visible"));
//! ```
//!
//! ## Features
//!
//! - `cli` (default): the `siteui` binary, config file layering, tokio timers
//! - `web`: the browser backend and the `web::start` entry point

pub mod app;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
#[cfg(feature = "cli")]
pub mod utils;
#[cfg(feature = "web")]
pub mod web;

pub use app::SiteApp;
pub use crate::core::{cmd::Cmd, event::Event, raw_event::RawEvent};
pub use infrastructure::{dom::Document, timers::Timers};
pub use integration::runtime::Runtime;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
