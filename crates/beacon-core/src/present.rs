//! Full-screen menu rendering: the mission-control panel and its help page.
//!
//! Both screens are assembled in two passes. The first pass builds every
//! content row and measures it, the second wraps the rows at the width of
//! the widest one, so the box borders always close and columns always line
//! up no matter how the registry or theme changes.

use crate::format::format_duration;
use crate::menu::categories;
use crate::render::{
    bottom_border, center, content_line, draw_box, draw_separator, top_border, visible_width,
};
use crate::theme::Theme;

const MENU_TITLE: &str = "🚀 BEACON MISSION CONTROL";
const NEW_BADGE: &str = "(NEW!)";

/// Render the complete main menu screen.
///
/// One box holds a centered title, every category with its items, the exit
/// row, and a usage hint. Item rows share two aligned columns across all
/// categories: the label column and the right-justified duration column.
pub fn render_main_menu(theme: &Theme) -> String {
    struct Row {
        key: String,
        name: String,
        duration: String,
        description: String,
    }

    let mut name_col = 0;
    let mut duration_col = 0;
    let blocks: Vec<(String, Vec<Row>)> = categories()
        .iter()
        .map(|category| {
            let header = theme.secondary.paint(&format!("{} {}", category.emoji, category.name));
            let rows = category
                .items
                .iter()
                .map(|item| {
                    let mut name = format!("{} {}", item.emoji, item.label);
                    if item.is_new {
                        name.push(' ');
                        name.push_str(&theme.highlight.paint(NEW_BADGE));
                    }
                    let duration = format_duration(item.duration_secs, theme);
                    name_col = name_col.max(visible_width(&name));
                    duration_col = duration_col.max(visible_width(&duration));
                    Row {
                        key: theme.info.paint(&format!("[{}]", item.key)),
                        name,
                        duration,
                        description: theme.muted.paint(item.description),
                    }
                })
                .collect();
            (header, rows)
        })
        .collect();

    let divider = theme.dim.paint(&theme.glyphs.vertical.to_string());
    let mut body: Vec<(String, Vec<String>)> = Vec::new();
    for (header, rows) in blocks {
        let formatted = rows
            .iter()
            .map(|row| {
                let name_pad = " ".repeat(name_col - visible_width(&row.name));
                let duration_pad = " ".repeat(duration_col - visible_width(&row.duration));
                format!(
                    "{} {}{}  {}{} {} {}",
                    row.key,
                    row.name,
                    name_pad,
                    duration_pad,
                    row.duration,
                    divider,
                    row.description
                )
            })
            .collect();
        body.push((header, formatted));
    }

    let exit_row = format!("{} Exit", theme.error.paint("[0]"));
    let hint = theme.muted.paint("Type a key or shortcut to launch, 'h' for help");

    let inner = body
        .iter()
        .flat_map(|(header, rows)| std::iter::once(header).chain(rows.iter()))
        .chain([&exit_row, &hint])
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0)
        .max(visible_width(MENU_TITLE));

    let rule = theme.dim.paint(&theme.glyphs.horizontal.to_string().repeat(inner));
    let mut lines = Vec::new();
    lines.push(center(&theme.primary.paint(MENU_TITLE), inner));
    lines.push(String::new());
    for (i, (header, rows)) in body.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(header.clone());
        lines.push(rule.clone());
        lines.extend(rows.iter().cloned());
    }
    lines.push(String::new());
    lines.push(exit_row);
    lines.push(String::new());
    lines.push(hint);

    draw_box(&lines, None, inner + 3, theme)
}

/// Render the help screen: every shortcut, the special commands, and the
/// navigation notes, separated by titled rules inside one box.
pub fn render_help(theme: &Theme) -> String {
    let mut name_col = 0;
    let shortcut_rows: Vec<(String, String)> = categories()
        .iter()
        .flat_map(|category| category.items.iter())
        .filter(|item| !item.shortcuts.is_empty())
        .map(|item| {
            let name = format!("{} {}", item.emoji, item.label);
            name_col = name_col.max(visible_width(&name));
            let tokens = item.shortcuts.iter().take(2).copied().collect::<Vec<_>>().join(", ");
            (name, theme.info.paint(&tokens))
        })
        .collect();

    let specials = [
        ("h, help", "Show this screen"),
        ("r, rec", "Recommended next steps"),
        ("a, auto", "Queue every command"),
        ("0, x, exit", "Leave the menu"),
    ];
    let token_col = specials.iter().map(|(tokens, _)| tokens.len()).max().unwrap_or(0);

    let notes = [
        "Number keys launch commands directly",
        "Text shortcuts match the list above",
        "'x' also cancels a running operation",
    ];

    let command_rows: Vec<String> = shortcut_rows
        .iter()
        .map(|(name, tokens)| {
            let pad = " ".repeat(name_col - visible_width(name));
            format!("{}{}  {}", name, pad, tokens)
        })
        .collect();
    let special_rows: Vec<String> = specials
        .iter()
        .map(|(tokens, description)| {
            let pad = " ".repeat(token_col - tokens.len());
            format!("{}{}  {}", theme.info.paint(tokens), pad, theme.muted.paint(description))
        })
        .collect();
    let note_rows: Vec<String> = notes.iter().map(|note| theme.muted.paint(note)).collect();

    let inner = command_rows
        .iter()
        .chain(&special_rows)
        .chain(&note_rows)
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0);
    let width = (inner + 3).max(visible_width("Special Commands") + 4);

    let mut out = Vec::new();
    out.push(top_border(width, Some("Help"), theme));
    for line in &command_rows {
        out.push(content_line(line, width, theme));
    }
    out.push(draw_separator(width, Some("Special Commands"), theme));
    for line in &special_rows {
        out.push(content_line(line, width, theme));
    }
    out.push(draw_separator(width, Some("Navigation"), theme));
    for line in &note_rows {
        out.push(content_line(line, width, theme));
    }
    out.push(bottom_border(width, theme));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip_ansi;

    #[test]
    fn test_main_menu_lines_share_width() {
        let menu = render_main_menu(&Theme::dark());
        let widths: Vec<usize> = menu.lines().map(visible_width).collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]), "ragged widths: {:?}", widths);
    }

    #[test]
    fn test_main_menu_lists_every_command() {
        let plain = strip_ansi(&render_main_menu(&Theme::dark()));
        for label in [
            "Website Audit",
            "AI Scan",
            "Performance",
            "SEO",
            "Accessibility",
            "Security",
            "Link Check",
            "Summary Report",
            "Trend Report",
        ] {
            assert!(plain.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_main_menu_structure() {
        let plain = strip_ansi(&render_main_menu(&Theme::dark()));
        assert!(plain.contains("BEACON MISSION CONTROL"));
        assert!(plain.contains("[0] Exit"));
        assert_eq!(plain.matches(NEW_BADGE).count(), 2);

        let audits = plain.find("Audits").unwrap();
        let quality = plain.find("Quality").unwrap();
        let reports = plain.find("Reports").unwrap();
        assert!(audits < quality && quality < reports);
    }

    #[test]
    fn test_main_menu_duration_column_alignment() {
        let plain = strip_ansi(&render_main_menu(&Theme::dark()));
        assert!(plain.contains("45s │ Crawl the site"));
        assert!(plain.contains("1m 30s │ Model-assisted"));
        // Right alignment: the shorter duration carries left padding.
        assert!(plain.contains("    45s │"));
    }

    #[test]
    fn test_help_lines_share_width() {
        let help = render_help(&Theme::dark());
        let widths: Vec<usize> = help.lines().map(visible_width).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "ragged widths: {:?}", widths);
    }

    #[test]
    fn test_help_shows_first_two_shortcuts() {
        let plain = strip_ansi(&render_help(&Theme::dark()));
        assert!(plain.contains("w, web"));
        assert!(!plain.contains("w, web, site"));
        assert!(plain.contains("acc, a11y"));
    }

    #[test]
    fn test_help_sections_and_junctions() {
        let help = render_help(&Theme::dark());
        let plain = strip_ansi(&help);
        assert!(plain.contains("Help"));
        assert!(plain.contains("Special Commands"));
        assert!(plain.contains("Navigation"));
        assert!(plain.contains("0, x, exit"));
        assert!(plain.contains("├"));
        assert!(plain.contains("┤"));
    }
}
