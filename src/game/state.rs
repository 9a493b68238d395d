use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::game::{Board, step};
use crate::{BOARD_COLS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimCommand {
    Start,
    Stop,
    /// Start when stopped, stop when running.
    ToggleRunning,
    Clear,
    Randomize,
    ToggleCell { row: usize, col: usize },
    Shutdown,
}

/// What the simulation publishes after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub running: bool,
    pub generation: u64,
    pub population: usize,
}

pub struct Game {
    pub board: Board,
    pub running: bool,
    pub generation: u64,
    density: f64,
    rng: StdRng,
}

impl Game {
    pub fn new(settings: &Settings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = if settings.random {
            Board::random(BOARD_ROWS, BOARD_COLS, settings.density, &mut rng)
        } else {
            Board::new(BOARD_ROWS, BOARD_COLS)
        };
        Self {
            board,
            running: false,
            generation: 0,
            density: settings.density,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances one generation. Does nothing while stopped.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.board = step(&self.board);
        self.generation += 1;
        if self.board.is_empty() {
            debug!(generation = self.generation, "population died out");
        }
        true
    }

    /// Applies a command and reports whether anything visible changed.
    /// Entering the running state steps once immediately.
    pub fn handle_command(&mut self, cmd: SimCommand) -> bool {
        match cmd {
            SimCommand::Start => self.start(),
            SimCommand::Stop => self.stop(),
            SimCommand::ToggleRunning => {
                if self.running {
                    self.stop()
                } else {
                    self.start()
                }
            }
            SimCommand::Clear => {
                self.board = Board::new(self.board.rows, self.board.cols);
                self.generation = 0;
                true
            }
            SimCommand::Randomize => {
                self.board = Board::random(self.board.rows, self.board.cols, self.density, &mut self.rng);
                self.generation = 0;
                true
            }
            SimCommand::ToggleCell { row, col } => {
                if !self.board.in_bounds(row, col) {
                    warn!(row, col, "ignoring toggle outside the board");
                    return false;
                }
                self.board = self.board.toggled(row, col);
                true
            }
            SimCommand::Shutdown => false,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            running: self.running,
            generation: self.generation,
            population: self.board.population(),
        }
    }

    fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        debug!(generation = self.generation, "simulation started");
        self.running = true;
        self.tick();
        true
    }

    fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        debug!(generation = self.generation, "simulation stopped");
        self.running = false;
        true
    }
}
