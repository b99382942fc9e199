//! Registry listing command, for scripting and quick reference.

use anyhow::Result;
use colored::Colorize;

use beacon_core::{categories, format_duration, get_theme};

/// Print every registered command, grouped by category.
pub fn execute(json_output: bool) -> Result<()> {
    if json_output {
        let listing = serde_json::json!({ "categories": categories() });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let theme = get_theme();
    println!("{}", "Registered commands:".bold().cyan());

    let mut total = 0;
    for category in categories() {
        println!("\n{} {}", category.emoji, theme.secondary.paint(category.name));
        for item in category.items {
            total += 1;
            let badge = if item.is_new {
                format!(" {}", theme.highlight.paint("(NEW!)"))
            } else {
                String::new()
            };
            println!(
                "  {} {} {}{}  {}  {}",
                theme.info.paint(&format!("[{}]", item.key)),
                item.emoji,
                item.label,
                badge,
                format_duration(item.duration_secs, &theme),
                theme.muted.paint(&item.shortcuts.join(", ")),
            );
        }
    }

    println!("\n{} commands registered", total);
    Ok(())
}
