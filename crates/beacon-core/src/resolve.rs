//! Turns a raw line of user input into a menu action.
//!
//! Resolution is total: every string maps to exactly one [`Resolution`]
//! variant. Reserved tokens are checked before the registry scan, so they
//! can never be shadowed by an item key or shortcut.

use crate::menu::{MenuCategory, MenuItem};

/// Outcome of resolving one line of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Leave the menu.
    Exit,
    /// Show the help screen.
    Help,
    /// Show recommended commands.
    Recommendations,
    /// Queue every command for sequential execution.
    AutoRun,
    /// A registry item matched by key or shortcut.
    Selected(&'a MenuItem),
    /// Nothing matched.
    NoMatch,
}

/// Whether a normalized token is claimed by a built-in menu action.
pub fn is_reserved_token(token: &str) -> bool {
    matches!(
        token,
        "0" | "x" | "exit" | "h" | "help" | "r" | "rec" | "recommendations" | "a" | "auto"
    )
}

/// Resolve one line of input against the registry.
///
/// Input is trimmed and lowercased first. Reserved tokens win over the
/// registry; after that, items are scanned in declaration order and each
/// item's key is checked before its shortcuts. The first match is returned.
pub fn resolve_input<'a>(raw: &str, categories: &'a [MenuCategory]) -> Resolution<'a> {
    let input = raw.trim().to_lowercase();

    match input.as_str() {
        "0" | "x" | "exit" => return Resolution::Exit,
        "h" | "help" => return Resolution::Help,
        "r" | "rec" | "recommendations" => return Resolution::Recommendations,
        "a" | "auto" => return Resolution::AutoRun,
        _ => {}
    }

    for category in categories {
        for item in category.items {
            if item.key == input || item.shortcuts.contains(&input.as_str()) {
                return Resolution::Selected(item);
            }
        }
    }

    Resolution::NoMatch
}
