//! ratatui-based terminal UI
//!
//! Not part of the stable library API; the binary drives [`App`] and the
//! panes render whichever [`Scene`] the CLI built.

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Scene};
