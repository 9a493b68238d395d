// Shared board/UI constants.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const BOARD_ROWS: usize = 25;
pub const BOARD_COLS: usize = 25;
pub const CELL_W: usize = 2; // each cell is two characters wide so the board looks square
pub const PLAY_W: usize = BOARD_COLS * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_ROWS + 2; // inner height plus top/bottom walls
pub const INFO_H: u16 = 3;
pub const CONTROLS_H: u16 = 4;
// Minimal pane size to fit the info box, well, controls and cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;
pub const MIN_PANE_HEIGHT: u16 = (PLAY_H as u16) + INFO_H + CONTROLS_H + 2;
pub const DEFAULT_TICK_MS: u64 = 250;
pub const DEFAULT_DENSITY: f64 = 0.25;

/// Runtime settings for the life board.
#[derive(Debug, Clone, Parser)]
#[command(name = "lifeboard", version, about = "Conway's Game of Life on a 25x25 terminal board")]
pub struct Settings {
    /// Milliseconds between generations while running.
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub tick_ms: u64,

    /// Probability that a cell starts alive when randomizing.
    #[arg(long, value_name = "P", default_value_t = DEFAULT_DENSITY, value_parser = parse_density)]
    pub density: f64,

    /// Seed for the random fill; entropy is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from a random board instead of an empty one.
    #[arg(long)]
    pub random: bool,

    /// Write logs to this file (the terminal is owned by the UI).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level (debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            density: DEFAULT_DENSITY,
            seed: None,
            random: false,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("density must be between 0 and 1, got {p}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let settings = Settings::parse_from(["lifeboard"]);
        assert_eq!(settings.tick_ms, 250);
        assert_eq!(settings.tick_interval(), Duration::from_millis(250));
        assert!((settings.density - 0.25).abs() < f64::EPSILON);
        assert!(settings.seed.is_none());
        assert!(!settings.random);
    }

    #[test]
    fn density_outside_unit_range_is_rejected() {
        assert!(Settings::try_parse_from(["lifeboard", "--density", "1.5"]).is_err());
        assert!(Settings::try_parse_from(["lifeboard", "--density", "-0.1"]).is_err());
        assert!(Settings::try_parse_from(["lifeboard", "--density", "abc"]).is_err());
        let ok = Settings::try_parse_from(["lifeboard", "--density", "0.5"]).unwrap();
        assert!((ok.density - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_tick_is_rejected() {
        assert!(Settings::try_parse_from(["lifeboard", "--tick-ms", "0"]).is_err());
    }
}
