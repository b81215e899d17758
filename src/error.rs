use std::path::PathBuf;

/// Contract violations reported by the game engine.
///
/// Benign outcomes such as a full column are not errors; they come back as
/// [`MoveResult`](crate::game::MoveResult) variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end the terminal front-end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}
