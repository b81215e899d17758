use tracing::{debug, info};

use super::board::DropError;
use super::line::find_winning_line;
use super::{GameState, GameStatus, Player, Position};
use crate::config::GameConfig;
use crate::error::{ConfigError, EngineError};

/// What a single call to [`GameEngine::apply_move`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// A piece landed at `(row, col)` and `next` is now to move.
    Continue { next: Player, row: usize, col: usize },
    /// `player` completed `line`; the game is over.
    Win { player: Player, line: Vec<Position> },
    /// The last empty cell was filled without a win; the game is over.
    Tie,
    /// The column has no empty cell. Nothing changed.
    ColumnFull,
    /// The game is already over. Nothing changed.
    Ignored,
}

impl MoveResult {
    /// Whether this move placed a piece on the board
    pub fn placed_piece(&self) -> bool {
        matches!(
            self,
            MoveResult::Continue { .. } | MoveResult::Win { .. } | MoveResult::Tie
        )
    }
}

/// Owns one game and applies the rules move by move.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        GameEngine {
            state: GameState::initial(config.rows, config.cols),
            config,
        }
    }

    /// Like [`GameEngine::new`], but rejects configurations that cannot host a
    /// sensible game.
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the current game
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Columns that can still take a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.state.game_over {
            return Vec::new();
        }

        (0..self.config.cols)
            .filter(|&col| !self.state.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// An out-of-range column is a caller bug and is rejected before anything
    /// else is looked at. A finished game or a full column leave the state
    /// untouched and report [`MoveResult::Ignored`] or
    /// [`MoveResult::ColumnFull`].
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, EngineError> {
        let cols = self.config.cols;
        if column >= cols {
            return Err(EngineError::InvalidColumn { column, cols });
        }

        if self.state.game_over {
            debug!(column, "move ignored, game is over");
            return Ok(MoveResult::Ignored);
        }

        let player = self.state.current_player;
        let row = match self.state.board.drop_piece(column, player) {
            Ok(row) => row,
            Err(DropError::ColumnFull) => {
                debug!(column, "column is full");
                return Ok(MoveResult::ColumnFull);
            }
            Err(DropError::InvalidColumn) => {
                return Err(EngineError::InvalidColumn { column, cols });
            }
        };
        debug!(%player, row, column, "piece placed");

        let placed = Position::new(row, column);
        if let Some(line) = find_winning_line(&self.state.board, placed, self.config.win_length) {
            info!(%player, ?line, "game won");
            self.state.game_over = true;
            self.state.winning_line = line.clone();
            return Ok(MoveResult::Win { player, line });
        }

        if self.state.board.is_full() {
            info!(moves = self.state.moves_played(), "game tied");
            self.state.game_over = true;
            return Ok(MoveResult::Tie);
        }

        let next = player.other();
        self.state.current_player = next;
        Ok(MoveResult::Continue {
            next,
            row,
            col: column,
        })
    }

    /// Discard the current game and start over with the same configuration.
    pub fn new_game(&mut self) -> &GameState {
        info!(rows = self.config.rows, cols = self.config.cols, "new game");
        self.state = GameState::initial(self.config.rows, self.config.cols);
        &self.state
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
