//! ctxsel: a tri-state checkbox tree for picking calendar contexts and their sections.
//!
//! The selection model lives in [`selection`] and is usable on its own; [`app_state`] and
//! [`ui`] wrap it into a keyboard-driven dropdown for the terminal.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod context;
pub mod dropdown;
pub mod error;
pub mod input;
pub mod selection;
pub mod summary;
pub mod tree;
pub mod ui;
