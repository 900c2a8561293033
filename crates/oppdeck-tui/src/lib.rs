//! oppdeck-tui - Terminal UI for oppdeck
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! the render (View) function, widget display, and the main event loop
//! driving the TEA state machine from oppdeck-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
