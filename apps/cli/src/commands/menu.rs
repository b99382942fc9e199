//! The interactive mission-control loop.
//!
//! Renders the menu, reads one line per prompt, resolves it, and dispatches.
//! Execution of a selected command is delegated to the audit runner; this
//! loop only reports what was chosen.

use std::io::{self, Write};

use anyhow::Result;
use beacon_core::menu::MenuItem;
use beacon_core::theme::Theme;
use beacon_core::{
    Resolution, categories, draw_box, fit_width, format_duration, get_theme, render_help,
    render_main_menu, resolve_input, visible_width,
};

/// Run the menu until the user exits or stdin closes.
pub fn execute() -> Result<()> {
    tracing::debug!("Entering interactive menu");

    loop {
        let theme = get_theme();
        println!("\n{}", render_main_menu(&theme));

        print!("\n{} ", theme.primary.paint("❯"));
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed, same as an explicit exit
            println!();
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        match resolve_input(&input, categories()) {
            Resolution::Exit => {
                println!("\nGoodbye! 👋");
                break;
            }
            Resolution::Help => println!("\n{}", render_help(&theme)),
            Resolution::Recommendations => print_recommendations(&theme),
            Resolution::AutoRun => print_auto_run(&theme),
            Resolution::Selected(item) => print_selection(item, &theme),
            Resolution::NoMatch => {
                println!("{}", theme.warning.paint("Unrecognized input. Type 'h' for help."));
            }
        }
    }

    Ok(())
}

/// Panel of suggested commands: everything new first, then the first
/// not-yet-listed command of each category.
fn print_recommendations(theme: &Theme) {
    tracing::debug!("Rendering recommendations panel");

    let mut picks: Vec<&MenuItem> = categories()
        .iter()
        .flat_map(|category| category.items.iter())
        .filter(|item| item.is_new)
        .collect();
    for category in categories() {
        if let Some(item) =
            category.items.iter().find(|item| !picks.iter().any(|pick| pick.id == item.id))
        {
            picks.push(item);
        }
    }

    let name_col = picks
        .iter()
        .map(|item| visible_width(&display_name(item, theme)))
        .max()
        .unwrap_or(0);
    let lines: Vec<String> = picks
        .iter()
        .map(|item| {
            let name = display_name(item, theme);
            let pad = " ".repeat(name_col - visible_width(&name));
            format!("{}{}  {}", name, pad, theme.muted.paint(item.description))
        })
        .collect();

    let title = "Recommended Next Steps";
    let width = fit_width(&lines, Some(title));
    println!("\n{}", draw_box(&lines, Some(title), width, theme));
}

/// The full run queue with per-command and total durations.
fn print_auto_run(theme: &Theme) {
    tracing::debug!("Rendering auto-run queue");

    let items: Vec<&MenuItem> =
        categories().iter().flat_map(|category| category.items.iter()).collect();

    let name_col =
        items.iter().map(|item| visible_width(&display_name(item, theme))).max().unwrap_or(0);
    let durations: Vec<String> =
        items.iter().map(|item| format_duration(item.duration_secs, theme)).collect();
    let duration_col = durations.iter().map(|d| visible_width(d)).max().unwrap_or(0);

    let mut lines: Vec<String> = items
        .iter()
        .zip(&durations)
        .enumerate()
        .map(|(i, (item, duration))| {
            let name = display_name(item, theme);
            let name_pad = " ".repeat(name_col - visible_width(&name));
            let duration_pad = " ".repeat(duration_col - visible_width(duration));
            format!("{}. {}{}  {}{}", i + 1, name, name_pad, duration_pad, duration)
        })
        .collect();

    let total: f64 = items.iter().map(|item| item.duration_secs).sum();
    lines.push(String::new());
    lines.push(format!("Total estimated: {}", format_duration(total, theme)));
    lines.push(theme.dim.paint("Execution is delegated to the audit runner."));

    let title = "Auto-Run Queue";
    let width = fit_width(&lines, Some(title));
    println!("\n{}", draw_box(&lines, Some(title), width, theme));
}

/// Confirmation panel for one selected command.
fn print_selection(item: &MenuItem, theme: &Theme) {
    tracing::info!("Selected command: {}", item.id);

    let lines = vec![
        display_name(item, theme),
        theme.muted.paint(item.description),
        String::new(),
        format!("Estimated duration: {}", format_duration(item.duration_secs, theme)),
        theme.dim.paint("Execution is delegated to the audit runner."),
    ];

    let title = "Selected";
    let width = fit_width(&lines, Some(title));
    println!("\n{}", draw_box(&lines, Some(title), width, theme));
}

fn display_name(item: &MenuItem, theme: &Theme) -> String {
    let mut name = format!("{} {}", item.emoji, item.label);
    if item.is_new {
        name.push(' ');
        name.push_str(&theme.highlight.paint("(NEW!)"));
    }
    name
}
