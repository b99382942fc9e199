//! Beacon CLI - Mission control for the Beacon audit suite
//!
//! This CLI provides a `beacon` command for browsing and launching audits,
//! quality checks, and reports from an interactive terminal menu.

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use beacon_core::config::BeaconConfig;
use beacon_core::theme::Theme;
use commands::{ThemeCommand, list, menu, theme};

/// Beacon CLI - Mission control for website audits
///
/// Beacon is a terminal front end for the Beacon audit suite: an interactive
/// menu over its audits, quality checks, and reports.
#[derive(Parser, Debug)]
#[command(
    name = "beacon",
    author,
    version,
    about = "Beacon - Mission control for website audits",
    long_about = "Beacon is a terminal front end for the Beacon audit suite.\nIt presents every audit, quality check, and report in one interactive menu\nand delegates execution to the audit runner."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Theme preset override (dark, light, ocean, mono)
    #[arg(short = 't', long, global = true)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive mission-control menu
    ///
    /// This is also what plain `beacon` runs. One line of input per prompt;
    /// type 'h' inside the menu for the full key reference.
    Menu,

    /// List every registered command
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List and preview themes
    #[command(subcommand)]
    Theme(ThemeCommand),
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber =
        FmtSubscriber::builder().with_max_level(level).without_time().with_target(false).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    beacon_core::validate(beacon_core::categories())?;
    init_theme(args.theme.as_deref())?;

    match args.command {
        Some(Command::Menu) | None => menu::execute(),
        Some(Command::List { json }) => list::execute(json),
        Some(Command::Theme(cmd)) => theme::execute(cmd),
    }
}

/// Install the active theme: the `--theme` flag wins, otherwise the config
/// file (written with defaults on first run) decides.
fn init_theme(override_preset: Option<&str>) -> anyhow::Result<()> {
    let theme = match override_preset {
        Some(name) => Theme::preset(name)?,
        None => {
            let config = BeaconConfig::load().context("failed to load Beacon configuration")?;
            Theme::from_config(&config.theme)?
        }
    };
    beacon_core::set_theme(theme);
    Ok(())
}
