#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Athlete management dashboard TUI for a sports authority admin panel.
//!
//! Everything is in-memory: the fixtures in [`data`] are fixed at process
//! start, and "signing in" flips a flag on [`model::SessionState`]. Nothing
//! is persisted and nothing leaves the process.

pub mod data;
pub mod model;
pub mod tui;
