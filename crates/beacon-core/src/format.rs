//! Formatting helpers: durations, trends, health scores, issue counts.
//!
//! Each helper maps a numeric input to a short styled string. The theme is
//! passed in; the visible text is the same whichever theme renders it.

use crate::theme::{Style, Theme};

const TREND_UP: &str = "↑";
const TREND_DOWN: &str = "↓";
const TREND_FLAT: &str = "→";

const HEALTH_GOOD: &str = "🎯";
const HEALTH_FAIR: &str = "⚠️";
const HEALTH_POOR: &str = "❌";

/// Issue severity buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Human label for panels and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    fn emoji(self) -> &'static str {
        match self {
            Self::Critical => "🔴",
            Self::High => "🟠",
            Self::Medium => "🟡",
            Self::Low => "⚪",
        }
    }

    fn style(self, theme: &Theme) -> &Style {
        match self {
            Self::Critical => &theme.error,
            Self::High => &theme.warning,
            Self::Medium => &theme.info,
            Self::Low => &theme.muted,
        }
    }
}

/// Format a duration given in seconds.
///
/// Under a second renders as `<1s`; under a minute as rounded whole seconds;
/// longer durations as minutes with the rounded remainder appended only when
/// it is nonzero (`1m 30s`, but `2m` flat).
pub fn format_duration(seconds: f64, theme: &Theme) -> String {
    if seconds < 1.0 {
        theme.muted.paint("<1s")
    } else if seconds < 60.0 {
        theme.info.paint(&format!("{}s", seconds.round()))
    } else {
        let mins = (seconds / 60.0).floor();
        let rem = (seconds - mins * 60.0).round();
        if rem > 0.0 {
            theme.info.paint(&format!("{}m {}s", mins, rem))
        } else {
            theme.info.paint(&format!("{}m", mins))
        }
    }
}

/// Format the movement from `previous` to `current` as an arrow plus a
/// rounded percentage.
///
/// A zero `previous` has no meaningful percentage, so it renders as the bare
/// neutral arrow whatever `current` is.
pub fn format_trend(current: f64, previous: f64, theme: &Theme) -> String {
    if previous == 0.0 {
        return theme.muted.paint(TREND_FLAT);
    }

    let diff = current - previous;
    let pct = ((diff / previous) * 100.0).round();
    if diff > 0.0 {
        theme.success.paint(&format!("{} +{}%", TREND_UP, pct))
    } else if diff < 0.0 {
        theme.error.paint(&format!("{} {}%", TREND_DOWN, pct))
    } else {
        theme.muted.paint(&format!("{} 0%", TREND_FLAT))
    }
}

/// Format a 0–100 health score with a status emoji: target at 90+, warning
/// at 75+, cross below.
pub fn format_health_score(score: f64, theme: &Theme) -> String {
    if score >= 90.0 {
        theme.success.paint(&format!("{} {}/100", HEALTH_GOOD, score))
    } else if score >= 75.0 {
        theme.warning.paint(&format!("{} {}/100", HEALTH_FAIR, score))
    } else {
        theme.error.paint(&format!("{} {}/100", HEALTH_POOR, score))
    }
}

/// Format an issue count with its severity emoji, count right-aligned to two
/// columns.
pub fn format_issue_count(count: usize, severity: Severity, theme: &Theme) -> String {
    format!("{} {}", severity.emoji(), severity.style(theme).paint(&format!("{:>2}", count)))
}
