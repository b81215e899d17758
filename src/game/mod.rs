//! Core Connect Four rules: board representation, players, the stateless
//! line scan used for win detection, and the engine that sequences turns.

mod board;
mod engine;
pub mod line;
mod player;
mod state;

pub use board::{Board, Cell, DropError, Position, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::{GameEngine, MoveResult};
pub use line::{connected_line, find_winning_line, Direction, DIRECTIONS};
pub use player::Player;
pub use state::{GameState, GameStatus};
