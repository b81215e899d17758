use super::{Board, Player, Position, DEFAULT_COLS, DEFAULT_ROWS};

/// Coarse lifecycle of a game. A finished game stays finished until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Everything a front-end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) game_over: bool,
    pub(super) winning_line: Vec<Position>,
}

impl GameState {
    /// Create initial game state
    pub fn initial(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::FIRST,
            game_over: false,
            winning_line: Vec::new(),
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the winner once the game has been won
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The line that won the game, empty while in progress or after a tie
    pub fn winning_line(&self) -> &[Position] {
        &self.winning_line
    }

    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.contains(&pos)
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    /// The winner, if the game ended in a win rather than a tie
    pub fn winner(&self) -> Option<Player> {
        if self.game_over && !self.winning_line.is_empty() {
            Some(self.current_player)
        } else {
            None
        }
    }

    pub fn is_tie(&self) -> bool {
        self.game_over && self.winning_line.is_empty()
    }

    /// Number of pieces on the board
    pub fn moves_played(&self) -> usize {
        self.board.occupied()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
