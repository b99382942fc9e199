//! Theme inspection commands for the CLI.
//!
//! Provides commands to list the built-in presets and preview how a theme
//! renders every widget the menu uses.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use beacon_core::theme::Theme;
use beacon_core::{
    Severity, draw_box, draw_progress_bar, format_duration, format_health_score,
    format_issue_count, format_trend, get_theme, visible_width,
};

const BAR_WIDTH: usize = 24;

/// Theme inspection subcommands
#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// List all available theme presets
    List,
    /// Preview a theme's palette and widgets
    Preview {
        /// Preset name (defaults to the active theme)
        name: Option<String>,
    },
}

/// Execute theme command
pub fn execute(cmd: ThemeCommand) -> Result<()> {
    match cmd {
        ThemeCommand::List => list_themes(),
        ThemeCommand::Preview { name } => preview_theme(name.as_deref()),
    }
}

/// List all available presets, marking the active one.
fn list_themes() -> Result<()> {
    let presets = [
        ("dark", "Default dark theme (Beacon default)"),
        ("light", "Light theme for bright terminals"),
        ("ocean", "Deep blue palette with double borders"),
        ("mono", "Grayscale, ASCII borders, no color accents"),
    ];

    let active = get_theme();

    println!("{}", "Available themes:".bold());
    println!();

    for (name, description) in presets {
        let current = name == active.name;
        let marker = if current { "→ " } else { "  " };
        let name_display = if current { name.bright_green().bold() } else { name.white() };
        println!("{} {} - {}", marker, name_display, description);
    }

    Ok(())
}

/// Render a sample sheet in the named preset, or the active theme when no
/// name is given.
fn preview_theme(name: Option<&str>) -> Result<()> {
    let theme = match name {
        Some(name) => Theme::preset(name)?,
        None => get_theme(),
    };

    let slots = [
        ("primary", &theme.primary),
        ("secondary", &theme.secondary),
        ("success", &theme.success),
        ("warning", &theme.warning),
        ("error", &theme.error),
        ("info", &theme.info),
        ("muted", &theme.muted),
        ("highlight", &theme.highlight),
        ("dim", &theme.dim),
        ("border", &theme.border),
    ];
    let slot_col = slots.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    let palette: Vec<String> = slots
        .iter()
        .map(|(name, style)| {
            format!("{:<width$}  {}", name, style.paint("The quick brown fox"), width = slot_col)
        })
        .collect();
    let formatters = vec![
        format!(
            "{}  {}  {}",
            format_duration(90.0, &theme),
            format_trend(110.0, 100.0, &theme),
            format_health_score(92.0, &theme)
        ),
        format!(
            "{}  {}",
            format_issue_count(3, Severity::Critical, &theme),
            format_issue_count(12, Severity::Medium, &theme)
        ),
    ];
    let bars: Vec<String> = [25.0, 50.0, 75.0, 90.0]
        .iter()
        .map(|&percentage| draw_progress_bar(percentage, BAR_WIDTH, &theme))
        .collect();

    let inner = palette
        .iter()
        .chain(&formatters)
        .chain(&bars)
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0)
        .max(visible_width(&theme.name) + 1);

    let mut lines = palette;
    lines.push(String::new());
    lines.push(section_rule("Formatters", inner, &theme));
    lines.extend(formatters);
    lines.push(String::new());
    lines.push(section_rule("Progress", inner, &theme));
    lines.extend(bars);

    println!("{}", draw_box(&lines, Some(&theme.name), inner + 3, &theme));
    Ok(())
}

/// Centered section label in a dim rule, sized to one content row.
fn section_rule(title: &str, width: usize, theme: &Theme) -> String {
    let span = width.saturating_sub(visible_width(title) + 2);
    let left = span / 2;
    let right = span - left;
    let horizontal = theme.glyphs.horizontal.to_string();
    format!(
        "{} {} {}",
        theme.dim.paint(&horizontal.repeat(left)),
        theme.secondary.paint(title),
        theme.dim.paint(&horizontal.repeat(right)),
    )
}
