//! Standalone TUI binary for Lucky Six.

use std::process;

use clap::Parser;

use lucky_core::{GameConfig, GameSession};

#[derive(Parser)]
#[command(name = "lucky-tui", about = "Terminal UI for the Lucky Six dice game", version)]
struct Args {
    /// RNG seed for reproducible rolls
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() {
    let args = Args::parse();

    let session = GameSession::new(GameConfig::default().with_seed(args.seed));
    let app = lucky_tui::app::TuiApp::new(session);

    if let Err(e) = lucky_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
