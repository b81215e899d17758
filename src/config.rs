use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};

pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Board dimensions and the run length that wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be >= 1".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("game.cols must be >= 1".into()));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(
                "game.win_length must be >= 2".into(),
            ));
        }
        if self.win_length > self.rows.max(self.cols) {
            return Err(ConfigError::Validation(
                "game.win_length must fit on the board (<= max(rows, cols))".into(),
            ));
        }
        Ok(())
    }
}

/// Where the front-end writes its log file, and how verbose it is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub directory: PathBuf,
    pub file_name: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            directory: PathBuf::from("logs"),
            file_name: "connect_four.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    /// Parsed `level`
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.level.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "log.level must be one of trace, debug, info, warn, error (got '{}')",
                self.level
            ))
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log.file_name must not be empty".into(),
            ));
        }
        self.level()?;
        Ok(())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;
        self.log.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.game, GameConfig { rows: 6, cols: 7, win_length: 4 });
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
win_length = 5
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.win_length, 5);
        // Other fields should be defaults
        assert_eq!(config.game.rows, 6);
        assert_eq!(config.game.cols, 7);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.game.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = AppConfig::default();
        config.game.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_trivial_win_length() {
        let mut config = AppConfig::default();
        config.game.win_length = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_win_length_larger_than_board() {
        let mut config = AppConfig::default();
        config.game.win_length = 8;
        assert!(config.validate().is_err());

        config.game.win_length = 7;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let mut config = AppConfig::default();
        config.log.level = "loud".into();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_empty_log_file_name() {
        let mut config = AppConfig::default();
        config.log.file_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_level_parses() {
        let mut log = LogConfig::default();
        assert_eq!(log.level().unwrap(), tracing::Level::INFO);
        log.level = "debug".into();
        assert_eq!(log.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
rows = 8
cols = 9

[log]
level = "warn"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.rows, 8);
        assert_eq!(config.game.cols, 9);
        assert_eq!(config.game.win_length, DEFAULT_WIN_LENGTH);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nrows = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[game\nrows = ").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
