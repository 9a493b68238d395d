pub mod board;
pub mod rules;
pub mod state;

pub use board::{Board, Cell};
pub use rules::step;
pub use state::{Game, SimCommand, Snapshot};
