//! Command implementations for the Beacon CLI.

pub mod list;
pub mod menu;
pub mod theme;

pub use theme::ThemeCommand;
