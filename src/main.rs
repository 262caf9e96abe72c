use clap::Parser;
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use sponsor_board::core::config::{self, BoardConfig, CliOverrides};
use sponsor_board::core::roster;
use sponsor_board::tui;

#[derive(Parser)]
#[command(name = "sponsor-board", about = "Drag-and-drop sponsor pipeline board")]
struct Args {
    /// JSON roster to load instead of the built-in sponsors
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Press-to-release distance (in cells) below which a press counts as a tap
    #[arg(short, long)]
    tap_threshold: Option<f64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sponsor-board.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("sponsor-board.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, using defaults", e);
        BoardConfig::default()
    });
    let cli = CliOverrides {
        roster: args.roster,
        tap_threshold: args.tap_threshold,
    };
    let resolved = config::resolve(&file_config, &cli);

    let sponsors = match &resolved.roster_file {
        Some(path) => roster::load_roster(path).unwrap_or_else(|e| {
            warn!("Failed to load roster {}: {}, using built-in sponsors", path.display(), e);
            roster::default_roster()
        }),
        None => roster::default_roster(),
    };

    info!(
        "Sponsor board starting with {} sponsors (tap threshold {})",
        sponsors.len(),
        resolved.tap_threshold
    );

    tui::run(resolved, sponsors)
}
