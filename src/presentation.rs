//! Presentation layer
//!
//! Components bind the models to concrete document nodes: they resolve their
//! elements once at mount, translate events into model messages and render
//! model state as node-bound commands.

pub mod components;
