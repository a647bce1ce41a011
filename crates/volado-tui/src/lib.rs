//! volado-tui - Terminal UI for the coin flip
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from volado-app and adds terminal rendering, event polling, and
//! the mouse-drag gesture mapping.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
