use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
use expense_tracker::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based expense tracker with per-category spending charts",
    long_about = "A terminal-based expense tracker for quick session bookkeeping. \
                  Expenses are recorded in memory, summed per category, and \
                  visualized as a bar chart. Records are discarded on exit; only \
                  display settings are persisted."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (also the default when run without a subcommand)
    #[command(alias = "ui")]
    Tui,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Settings file already exists: {}", paths.settings_file().display());
            } else {
                settings.save(&paths)?;
                println!("Wrote default settings to: {}", paths.settings_file().display());
                println!();
                println!("Edit this file to change the currency symbol, time format,");
                println!("tick rate, or the view the TUI opens on.");
            }
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Time format:     {}", settings.time_format);
            println!("  Tick rate:       {} ms", settings.tick_rate_ms);
            println!("  Default view:    {:?}", settings.default_view);
        }
        Some(Commands::Tui) | None => {
            run_tui(&settings)?;
        }
    }

    Ok(())
}
