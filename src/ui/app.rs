use crate::config::GameConfig;
use crate::error::{AppError, EngineError};
use crate::game::{GameEngine, MoveResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        App {
            engine: GameEngine::new(config),
            selected_column: config.cols / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> Result<(), AppError> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key)?;
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), EngineError> {
        // Clear message on any key press
        self.message = None;
        let cols = self.engine.config().cols;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column)?;
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits are 1-based column shortcuts
                let column = c as usize - '1' as usize;
                if column < cols {
                    self.selected_column = column;
                    self.drop_piece(column)?;
                }
            }
            KeyCode::Char('r') => {
                self.engine.new_game();
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
        Ok(())
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, column: usize) -> Result<(), EngineError> {
        let result = self.engine.apply_move(column)?;
        self.message = outcome_message(&result);
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self.engine.state(), self.selected_column, self.message());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Status line text for a move outcome. Continuing play needs none; the header
/// already shows whose turn it is.
pub fn outcome_message(result: &MoveResult) -> Option<String> {
    match result {
        MoveResult::Continue { .. } => None,
        MoveResult::Win { player, .. } => Some(format!("{player} Wins!")),
        MoveResult::Tie => Some("It's a Tie!".to_string()),
        MoveResult::ColumnFull => Some("Column is full!".to_string()),
        MoveResult::Ignored => Some("Game over! Press 'r' to start a new game.".to_string()),
    }
}
