//! Beacon Core - Terminal mission-control menu for the Beacon audit suite.
//!
//! This crate provides the interactive menu building blocks, including:
//! - Command registry and input resolution
//! - Theme presets and config-driven color overrides
//! - Box, separator, and progress-bar text rendering
//! - Duration, trend, health, and issue formatters
//!
//! # Example
//!
//! ```rust
//! use beacon_core::{Resolution, categories, resolve_input, validate};
//!
//! fn main() -> beacon_core::error::Result<()> {
//!     validate(categories())?;
//!     match resolve_input("ai", categories()) {
//!         Resolution::Selected(item) => println!("launching {}", item.label),
//!         _ => {}
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod menu;
pub mod present;
pub mod render;
pub mod resolve;
pub mod theme;

pub use config::{BeaconConfig, CustomColors, ThemeConfig};
pub use error::{BeaconError, Result};
pub use format::{
    Severity, format_duration, format_health_score, format_issue_count, format_trend,
};
pub use menu::{MenuCategory, MenuItem, categories, find_item_by_id, validate};
pub use present::{render_help, render_main_menu};
pub use render::{
    center, draw_box, draw_progress_bar, draw_separator, fit_width, strip_ansi, visible_width,
};
pub use resolve::{Resolution, is_reserved_token, resolve_input};
pub use theme::{BoxGlyphs, Style, Theme, get_theme, set_theme};
