//! The command registry: every audit, check, and report Beacon can launch,
//! grouped into display categories.
//!
//! The table is static data. Order matters twice over: categories and items
//! render in declaration order, and input resolution scans in the same
//! order, so the first declared match wins. [`validate`] keeps that rule
//! from ever being load-bearing by rejecting colliding keys and shortcuts
//! up front.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{BeaconError, Result};
use crate::resolve::is_reserved_token;

/// One selectable menu action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuItem {
    /// Stable identifier, unique across the registry.
    pub id: &'static str,
    /// Single-character primary invocation token.
    pub key: &'static str,
    /// Display name.
    pub label: &'static str,
    /// Display glyph.
    pub emoji: &'static str,
    /// Estimated runtime, display only.
    pub duration_secs: f64,
    /// One-line description.
    pub description: &'static str,
    /// Alternate lowercase tokens that also select this item.
    pub shortcuts: &'static [&'static str],
    /// Marks recently added commands in the menu.
    pub is_new: bool,
}

/// A named, ordered grouping of menu items. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub items: &'static [MenuItem],
}

static CATEGORIES: &[MenuCategory] = &[
    MenuCategory {
        id: "audits",
        name: "Audits",
        emoji: "🔍",
        items: &[
            MenuItem {
                id: "website",
                key: "1",
                label: "Website Audit",
                emoji: "🌐",
                duration_secs: 45.0,
                description: "Crawl the site and run page-level checks",
                shortcuts: &["w", "web", "site"],
                is_new: false,
            },
            MenuItem {
                id: "ai-scan",
                key: "2",
                label: "AI Scan",
                emoji: "🤖",
                duration_secs: 90.0,
                description: "Model-assisted review of audit findings",
                shortcuts: &["ai", "scan"],
                is_new: true,
            },
            MenuItem {
                id: "performance",
                key: "3",
                label: "Performance",
                emoji: "⚡",
                duration_secs: 120.0,
                description: "Load timing and asset budget analysis",
                shortcuts: &["p", "perf"],
                is_new: false,
            },
            MenuItem {
                id: "seo",
                key: "4",
                label: "SEO",
                emoji: "📈",
                duration_secs: 30.0,
                description: "Metadata, sitemap, and indexing checks",
                shortcuts: &["s"],
                is_new: false,
            },
        ],
    },
    MenuCategory {
        id: "quality",
        name: "Quality",
        emoji: "🧪",
        items: &[
            MenuItem {
                id: "accessibility",
                key: "5",
                label: "Accessibility",
                emoji: "♿",
                duration_secs: 60.0,
                description: "WCAG contrast and landmark checks",
                shortcuts: &["acc", "a11y"],
                is_new: false,
            },
            MenuItem {
                id: "security",
                key: "6",
                label: "Security",
                emoji: "🔒",
                duration_secs: 150.0,
                description: "Header, TLS, and dependency advisories",
                shortcuts: &["sec"],
                is_new: false,
            },
            MenuItem {
                id: "links",
                key: "7",
                label: "Link Check",
                emoji: "🔗",
                duration_secs: 75.0,
                description: "Find broken internal and outbound links",
                shortcuts: &["l", "link"],
                is_new: false,
            },
        ],
    },
    MenuCategory {
        id: "reports",
        name: "Reports",
        emoji: "📊",
        items: &[
            MenuItem {
                id: "summary",
                key: "8",
                label: "Summary Report",
                emoji: "📋",
                duration_secs: 5.0,
                description: "One-page rollup of the latest run",
                shortcuts: &["sum"],
                is_new: false,
            },
            MenuItem {
                id: "trends",
                key: "9",
                label: "Trend Report",
                emoji: "📊",
                duration_secs: 10.0,
                description: "Score movement across recent runs",
                shortcuts: &["t", "trend"],
                is_new: true,
            },
        ],
    },
];

/// The full ordered registry.
pub fn categories() -> &'static [MenuCategory] {
    CATEGORIES
}

/// Linear search for an item by id; first match wins.
pub fn find_item_by_id(id: &str) -> Option<&'static MenuItem> {
    CATEGORIES.iter().flat_map(|category| category.items.iter()).find(|item| item.id == id)
}

/// Check the registry integrity invariant.
///
/// Item ids and keys must be pairwise distinct, keys must be a single
/// character, and no shortcut may equal any key, any other item's shortcut,
/// or a reserved resolver token (a reserved token is matched before the
/// registry scan, so such an entry could never be selected).
pub fn validate(categories: &[MenuCategory]) -> Result<()> {
    let mut ids: HashSet<&str> = HashSet::new();
    let mut tokens: HashMap<&str, &str> = HashMap::new();

    for category in categories {
        for item in category.items {
            if !ids.insert(item.id) {
                return Err(BeaconError::Registry(format!("duplicate item id '{}'", item.id)));
            }

            if item.key.chars().count() != 1 {
                return Err(BeaconError::Registry(format!(
                    "key '{}' of item '{}' must be a single character",
                    item.key, item.id
                )));
            }
            if is_reserved_token(item.key) {
                return Err(BeaconError::Registry(format!(
                    "key '{}' of item '{}' is a reserved token",
                    item.key, item.id
                )));
            }
            if let Some(other) = tokens.insert(item.key, item.id) {
                return Err(BeaconError::Registry(format!(
                    "key '{}' of item '{}' collides with item '{}'",
                    item.key, item.id, other
                )));
            }

            for shortcut in item.shortcuts {
                if is_reserved_token(shortcut) {
                    return Err(BeaconError::Registry(format!(
                        "shortcut '{}' of item '{}' is a reserved token",
                        shortcut, item.id
                    )));
                }
                if let Some(other) = tokens.insert(shortcut, item.id) {
                    return Err(BeaconError::Registry(format!(
                        "shortcut '{}' of item '{}' collides with item '{}'",
                        shortcut, item.id, other
                    )));
                }
            }
        }
    }

    tracing::debug!(
        "Registry validated: {} categories, {} commands",
        categories.len(),
        ids.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_passes_validation() {
        validate(categories()).unwrap();
    }

    #[test]
    fn test_no_duplicate_keys_or_shortcuts() {
        let mut seen = HashSet::new();
        for category in categories() {
            for item in category.items {
                assert!(seen.insert(item.key), "duplicate key: {}", item.key);
                for shortcut in item.shortcuts {
                    assert!(seen.insert(shortcut), "duplicate shortcut: {}", shortcut);
                }
            }
        }
    }

    #[test]
    fn test_find_item_by_id() {
        let item = find_item_by_id("ai-scan").unwrap();
        assert_eq!(item.label, "AI Scan");
        assert!(item.is_new);

        assert!(find_item_by_id("does-not-exist").is_none());
    }

    #[test]
    fn test_category_order_is_stable() {
        let names: Vec<&str> = categories().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Audits", "Quality", "Reports"]);
    }

    #[test]
    fn test_validate_rejects_duplicate_key() {
        static ITEMS: [MenuItem; 2] = [
            MenuItem {
                id: "first",
                key: "1",
                label: "First",
                emoji: "🌐",
                duration_secs: 1.0,
                description: "",
                shortcuts: &[],
                is_new: false,
            },
            MenuItem {
                id: "second",
                key: "1",
                label: "Second",
                emoji: "🌐",
                duration_secs: 1.0,
                description: "",
                shortcuts: &[],
                is_new: false,
            },
        ];
        static TABLE: [MenuCategory; 1] =
            [MenuCategory { id: "c", name: "C", emoji: "🔍", items: &ITEMS }];

        let err = validate(&TABLE).unwrap_err();
        assert!(format!("{}", err).contains("collides"));
    }

    #[test]
    fn test_validate_rejects_shortcut_matching_other_key() {
        static ITEMS: [MenuItem; 2] = [
            MenuItem {
                id: "first",
                key: "1",
                label: "First",
                emoji: "🌐",
                duration_secs: 1.0,
                description: "",
                shortcuts: &["2"],
                is_new: false,
            },
            MenuItem {
                id: "second",
                key: "2",
                label: "Second",
                emoji: "🌐",
                duration_secs: 1.0,
                description: "",
                shortcuts: &[],
                is_new: false,
            },
        ];
        static TABLE: [MenuCategory; 1] =
            [MenuCategory { id: "c", name: "C", emoji: "🔍", items: &ITEMS }];

        let err = validate(&TABLE).unwrap_err();
        assert!(format!("{}", err).contains("collides"));
    }

    #[test]
    fn test_validate_rejects_reserved_shortcut() {
        static ITEMS: [MenuItem; 1] = [MenuItem {
            id: "exiter",
            key: "1",
            label: "Exiter",
            emoji: "🌐",
            duration_secs: 1.0,
            description: "",
            shortcuts: &["exit"],
            is_new: false,
        }];
        static TABLE: [MenuCategory; 1] =
            [MenuCategory { id: "c", name: "C", emoji: "🔍", items: &ITEMS }];

        let err = validate(&TABLE).unwrap_err();
        assert!(format!("{}", err).contains("reserved token"));
    }

    #[test]
    fn test_validate_rejects_multi_char_key() {
        static ITEMS: [MenuItem; 1] = [MenuItem {
            id: "wide",
            key: "10",
            label: "Wide",
            emoji: "🌐",
            duration_secs: 1.0,
            description: "",
            shortcuts: &[],
            is_new: false,
        }];
        static TABLE: [MenuCategory; 1] =
            [MenuCategory { id: "c", name: "C", emoji: "🔍", items: &ITEMS }];

        let err = validate(&TABLE).unwrap_err();
        assert!(format!("{}", err).contains("single character"));
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        static ITEMS: [MenuItem; 2] = [
            MenuItem {
                id: "same",
                key: "1",
                label: "First",
                emoji: "🌐",
                duration_secs: 1.0,
                description: "",
                shortcuts: &[],
                is_new: false,
            },
            MenuItem {
                id: "same",
                key: "2",
                label: "Second",
                emoji: "🌐",
                duration_secs: 1.0,
                description: "",
                shortcuts: &[],
                is_new: false,
            },
        ];
        static TABLE: [MenuCategory; 1] =
            [MenuCategory { id: "c", name: "C", emoji: "🔍", items: &ITEMS }];

        let err = validate(&TABLE).unwrap_err();
        assert!(format!("{}", err).contains("duplicate item id"));
    }
}
