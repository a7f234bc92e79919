//! Infrastructure layer
//!
//! This module handles everything outside the components themselves:
//! - Document backends (in-memory, browser)
//! - Timer backends (virtual clock, tokio, browser)
//! - Configuration loading
//! - Scenario simulation and CLI argument processing

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dom;
pub mod scenario;
pub mod timers;
