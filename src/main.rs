use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

mod app;
mod config;
mod game;
mod sim;
mod ui;
pub use config::{
    BOARD_COLS, BOARD_ROWS, CELL_W, CONTROLS_H, INFO_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, PLAY_H,
    PLAY_W, Settings,
};

fn main() -> Result<()> {
    let settings = Settings::parse();
    init_logging(&settings)?;
    app::run(&settings)
}

// The UI owns the terminal, so logs only go to a file when one is requested.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
