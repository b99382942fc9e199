//! Pure text rendering: width measurement, centering, boxes, separators,
//! and progress bars.
//!
//! Every function returns a plain `String`; nothing here writes to a stream.
//! Padding math always goes through [`visible_width`], so styled and
//! unstyled content line up identically.

use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";

/// Remove ANSI escape sequences from a string.
///
/// Handles CSI sequences (ESC `[` up to their final byte), which covers the
/// SGR color codes this crate emits, and drops any other escape introducer
/// rather than letting it leak into width math. Total over all inputs.
pub fn strip_ansi(s: &str) -> String {
    let mut plain = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch != '\u{1b}' {
            plain.push(ch);
            continue;
        }

        let Some(next) = chars.next() else {
            break;
        };

        if next == '[' {
            for value in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&value) {
                    break;
                }
            }
        }
    }

    plain
}

/// Visible width of a string in terminal columns, ignoring escape sequences.
///
/// Wide glyphs (emoji, CJK) count as two columns, matching how terminals
/// advance the cursor.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Center `text` within `width` columns by padding with spaces.
///
/// Returns the input unchanged when it is already as wide as `width` or
/// wider. The left pad gets the smaller half of the slack.
pub fn center(text: &str, width: usize) -> String {
    let visible = visible_width(text);
    if visible >= width {
        return text.to_string();
    }
    let slack = width - visible;
    let left = slack / 2;
    let right = slack - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Smallest box width that fits every line plus an optional title.
pub fn fit_width(lines: &[String], title: Option<&str>) -> usize {
    let content = lines.iter().map(|line| visible_width(line) + 3).max().unwrap_or(4);
    let heading = title.map_or(4, |t| visible_width(t) + 4);
    content.max(heading)
}

fn rule(glyph: char, count: usize) -> String {
    glyph.to_string().repeat(count)
}

/// Top border, optionally embedding a centered title in the rule.
pub(crate) fn top_border(width: usize, title: Option<&str>, theme: &Theme) -> String {
    let g = theme.glyphs;
    let inner = width.saturating_sub(2);
    match title {
        Some(title) => {
            let span = inner.saturating_sub(visible_width(title) + 2);
            let left = span / 2;
            let right = span - left;
            format!(
                "{} {} {}",
                theme.border.paint(&format!("{}{}", g.top_left, rule(g.horizontal, left))),
                theme.primary.paint(title),
                theme.border.paint(&format!("{}{}", rule(g.horizontal, right), g.top_right)),
            )
        }
        None => theme
            .border
            .paint(&format!("{}{}{}", g.top_left, rule(g.horizontal, inner), g.top_right)),
    }
}

/// One content row: vertical borders, a leading space, and right padding out
/// to `width - 2` visible columns.
pub(crate) fn content_line(line: &str, width: usize, theme: &Theme) -> String {
    let g = theme.glyphs;
    let inner = width.saturating_sub(2);
    let pad = inner.saturating_sub(visible_width(line) + 1);
    let edge = theme.border.paint(&g.vertical.to_string());
    format!("{} {}{}{}", edge, line, " ".repeat(pad), edge)
}

pub(crate) fn bottom_border(width: usize, theme: &Theme) -> String {
    let g = theme.glyphs;
    let inner = width.saturating_sub(2);
    theme
        .border
        .paint(&format!("{}{}{}", g.bottom_left, rule(g.horizontal, inner), g.bottom_right))
}

/// Draw a bordered box of total visible width `width` around the given
/// content lines.
///
/// A title is centered in the top border, wrapped in one space per side,
/// rule in the border style and title in the primary style. Callers must
/// keep `visible_width(title) + 4 <= width`; over-wide titles or content
/// saturate the padding instead of panicking, which shortens the border run
/// ([`fit_width`] picks a width where that cannot happen).
pub fn draw_box(lines: &[String], title: Option<&str>, width: usize, theme: &Theme) -> String {
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(top_border(width, title, theme));
    for line in lines {
        out.push(content_line(line, width, theme));
    }
    out.push(bottom_border(width, theme));
    out.join("\n")
}

/// Horizontal rule with junction glyphs at both ends, for section breaks
/// inside a box. Titles center the same way as in [`draw_box`].
pub fn draw_separator(width: usize, title: Option<&str>, theme: &Theme) -> String {
    let g = theme.glyphs;
    let inner = width.saturating_sub(2);
    match title {
        Some(title) => {
            let span = inner.saturating_sub(visible_width(title) + 2);
            let left = span / 2;
            let right = span - left;
            format!(
                "{} {} {}",
                theme.border.paint(&format!("{}{}", g.tee_left, rule(g.horizontal, left))),
                theme.primary.paint(title),
                theme.border.paint(&format!("{}{}", rule(g.horizontal, right), g.tee_right)),
            )
        }
        None => theme
            .border
            .paint(&format!("{}{}{}", g.tee_left, rule(g.horizontal, inner), g.tee_right)),
    }
}

/// Render a percentage as a bracketed filled/empty bar.
///
/// `floor(percentage / 100 * width)` cells fill from the left; the bar is
/// styled success at 75 and above, warning at 50 and above, error below.
/// Callers keep `percentage` within [0, 100]; out-of-range values clamp to
/// the bar bounds rather than panicking.
pub fn draw_progress_bar(percentage: f64, width: usize, theme: &Theme) -> String {
    let filled = (((percentage / 100.0) * width as f64).floor() as usize).min(width);
    let empty = width - filled;

    let style = if percentage >= 75.0 {
        &theme.success
    } else if percentage >= 50.0 {
        &theme.warning
    } else {
        &theme.error
    };

    format!(
        "[{}{}] {}%",
        style.paint(&BAR_FILLED.repeat(filled)),
        theme.dim.paint(&BAR_EMPTY.repeat(empty)),
        percentage
    )
}
