//! Core Elm Architecture implementation
//!
//! This module contains the pieces every component shares:
//! - Raw host events and the translated component events
//! - Commands describing side effects
//! - The command executor applying them to a document and timers
//! - Timer identities

pub mod cmd;
pub mod cmd_executor;
pub mod event;
pub mod raw_event;
pub mod timer;
pub mod translator;
