//! Volado - flip a coin in your terminal
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates: volado-core (domain types), volado-app (engine), volado-tui
//! (rendering).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use volado_app::{default_data_dir, AudioCueService, Engine, HistoryStore};
use volado_core::prelude::*;

/// Volado - flip a coin in your terminal
#[derive(Parser, Debug)]
#[command(name = "volado")]
#[command(about = "A coin-toss TUI: swipe, flip, and keep the tally", long_about = None)]
struct Args {
    /// Directory for history and settings (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory with launch.wav / settle.wav cue files
    /// (built-in tones are used when absent)
    #[arg(long, value_name = "DIR")]
    assets_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print aggregate flip statistics as JSON and exit
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    if let Some(Command::Stats) = args.command {
        return print_stats(&data_dir);
    }

    // Logging goes to file, since the TUI owns stdout
    volado_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Volado starting");
    info!("Data directory: {}", data_dir.display());
    info!("═══════════════════════════════════════════════════════");

    let assets_dir = args.assets_dir.unwrap_or_else(|| data_dir.join("assets"));
    let audio = AudioCueService::acquire(&assets_dir);
    let engine = Engine::new(&data_dir, audio);

    let result = volado_tui::run(engine);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Volado exiting");
    result
}

/// Headless stats: read the durable history and print the aggregates.
fn print_stats(data_dir: &Path) -> Result<()> {
    let records = HistoryStore::new(data_dir).read_all();
    let stats = volado_app::compute_stats(&records);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
