//! Color theme system for Beacon terminal output.
//!
//! A theme is a table of semantic text styles plus a box-drawing glyph set.
//! Exactly one theme is active per process; render and format functions take
//! the theme as an argument so they stay pure, and the interactive surfaces
//! fetch the active theme right before each render.

use colored::{Color, Colorize};

use crate::config::ThemeConfig;
use crate::error::{BeaconError, Result};

/// One semantic text style: a truecolor foreground plus a bold flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { color: Color::TrueColor { r, g, b }, bold: false }
    }

    const fn rgb_bold(r: u8, g: u8, b: u8) -> Self {
        Self { color: Color::TrueColor { r, g, b }, bold: true }
    }

    /// Apply this style to a piece of text.
    ///
    /// Whether escape codes are actually emitted is decided by `colored`
    /// (tty detection, `NO_COLOR`, overrides); the visible text is unchanged
    /// either way.
    pub fn paint(&self, text: &str) -> String {
        let mut styled = text.color(self.color);
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

/// Box-drawing glyph set used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_left: char,
    pub tee_right: char,
}

impl BoxGlyphs {
    /// Rounded corners, light rules.
    pub const fn rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
            tee_left: '├',
            tee_right: '┤',
        }
    }

    /// Double-line rules.
    pub const fn double() -> Self {
        Self {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
            tee_left: '╠',
            tee_right: '╣',
        }
    }

    /// Plain ASCII for terminals without box-drawing glyphs.
    pub const fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
            tee_left: '+',
            tee_right: '+',
        }
    }
}

/// Beacon terminal theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Preset name this theme was built from ("custom" once colors are overridden).
    pub name: String,

    // Brand colors
    pub primary: Style,
    pub secondary: Style,

    // Status colors
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,

    // Text colors
    pub muted: Style,
    pub highlight: Style,
    pub dim: Style,

    // Border color
    pub border: Style,

    /// Box-drawing glyphs
    pub glyphs: BoxGlyphs,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Parse hex color string to an RGB color.
    ///
    /// Accepts formats: "#RRGGBB" or "RRGGBB"
    fn parse_hex_color(hex: &str) -> Result<Color> {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 {
            return Err(BeaconError::Theme(format!("Invalid hex color length: {}", hex)));
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|_| BeaconError::Theme(format!("Invalid red component in hex color: {}", hex)))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|_| BeaconError::Theme(format!("Invalid green component in hex color: {}", hex)))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|_| BeaconError::Theme(format!("Invalid blue component in hex color: {}", hex)))?;

        Ok(Color::TrueColor { r, g, b })
    }

    /// Look up a built-in preset by name.
    ///
    /// Unknown names are an error rather than a silent fallback, so a typo in
    /// config or on the command line surfaces immediately.
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            "ocean" => Ok(Self::ocean()),
            "mono" => Ok(Self::mono()),
            _ => Err(BeaconError::Theme(format!(
                "unknown preset '{}' (expected one of: {})",
                name,
                Self::preset_names().join(", ")
            ))),
        }
    }

    /// Names of the built-in presets, in listing order.
    pub fn preset_names() -> Vec<&'static str> {
        vec!["dark", "light", "ocean", "mono"]
    }

    /// Build a theme from configuration: preset first, then any custom hex
    /// colors layered on top. Malformed colors fail here, at load time.
    pub fn from_config(config: &ThemeConfig) -> Result<Self> {
        let mut theme = Self::preset(&config.preset)?;

        if let Some(ref colors) = config.colors {
            if let Some(ref hex) = colors.primary {
                theme.primary.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.secondary {
                theme.secondary.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.success {
                theme.success.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.warning {
                theme.warning.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.error {
                theme.error.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.info {
                theme.info.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.muted {
                theme.muted.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.highlight {
                theme.highlight.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.border {
                theme.border.color = Self::parse_hex_color(hex)?;
            }
            if let Some(ref hex) = colors.dim {
                theme.dim.color = Self::parse_hex_color(hex)?;
            }
            theme.name = "custom".to_string();
        }

        Ok(theme)
    }

    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            // Primary: Cyan (#00D9FF)
            primary: Style::rgb_bold(0, 217, 255),
            // Secondary: Purple (#A78BFA)
            secondary: Style::rgb(167, 139, 250),

            // Status colors
            success: Style::rgb(16, 185, 129), // Green
            warning: Style::rgb(245, 158, 11), // Yellow
            error: Style::rgb(239, 68, 68),    // Red
            info: Style::rgb(6, 182, 212),     // Blue

            // Text colors
            muted: Style::rgb(128, 128, 128),      // Gray
            highlight: Style::rgb_bold(250, 204, 21), // Bright yellow
            dim: Style::rgb(96, 96, 96),           // Dark gray

            // Border
            border: Style::rgb(100, 116, 139), // Slate gray

            glyphs: BoxGlyphs::rounded(),
        }
    }

    /// Creates a light theme for pale terminal backgrounds.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            primary: Style::rgb_bold(8, 145, 178),
            secondary: Style::rgb(124, 58, 237),

            success: Style::rgb(5, 150, 105),
            warning: Style::rgb(217, 119, 6),
            error: Style::rgb(220, 38, 38),
            info: Style::rgb(14, 116, 144),

            muted: Style::rgb(107, 114, 128),
            highlight: Style::rgb_bold(202, 138, 4),
            dim: Style::rgb(156, 163, 175),

            border: Style::rgb(148, 163, 184),

            glyphs: BoxGlyphs::rounded(),
        }
    }

    /// Creates the ocean theme (blue/teal palette, double-line borders).
    pub fn ocean() -> Self {
        Self {
            name: "ocean".to_string(),

            // Primary: Sky (#38BDF8)
            primary: Style::rgb_bold(56, 189, 248),
            // Secondary: Teal (#2DD4BF)
            secondary: Style::rgb(45, 212, 191),

            success: Style::rgb(52, 211, 153),  // Emerald
            warning: Style::rgb(251, 191, 36),  // Amber
            error: Style::rgb(251, 113, 133),   // Rose
            info: Style::rgb(125, 211, 252),    // Light sky

            muted: Style::rgb(100, 139, 160),
            highlight: Style::rgb_bold(94, 234, 212),
            dim: Style::rgb(71, 85, 105),

            border: Style::rgb(51, 101, 138),

            glyphs: BoxGlyphs::double(),
        }
    }

    /// Creates the mono theme: grayscale with ASCII borders, for terminals
    /// and logs where color or box-drawing glyphs are unwelcome.
    pub fn mono() -> Self {
        Self {
            name: "mono".to_string(),

            primary: Style::rgb_bold(255, 255, 255),
            secondary: Style::rgb(209, 213, 219),

            success: Style::rgb(229, 231, 235),
            warning: Style::rgb(156, 163, 175),
            error: Style::rgb_bold(255, 255, 255),
            info: Style::rgb(209, 213, 219),

            muted: Style::rgb(128, 128, 128),
            highlight: Style::rgb_bold(255, 255, 255),
            dim: Style::rgb(96, 96, 96),

            border: Style::rgb(128, 128, 128),

            glyphs: BoxGlyphs::ascii(),
        }
    }
}

use std::sync::{Mutex, OnceLock};

/// Global theme instance (defaults to dark on first access).
static THEME_INSTANCE: OnceLock<Mutex<Theme>> = OnceLock::new();

fn theme_instance() -> &'static Mutex<Theme> {
    THEME_INSTANCE.get_or_init(|| Mutex::new(Theme::default()))
}

/// Get the current active theme.
pub fn get_theme() -> Theme {
    theme_instance().lock().unwrap().clone()
}

/// Replace the active theme for the remainder of the process.
pub fn set_theme(theme: Theme) {
    tracing::debug!("Active theme set to '{}'", theme.name);
    *theme_instance().lock().unwrap() = theme;
}
