//! # Connect Four
//!
//! A Connect Four rules engine with a terminal front-end built with Ratatui.
//! The engine is a plain owned value: the caller configures the board,
//! forwards column drops, and renders whatever state and outcome come back.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, line scan, engine
//! - [`ui`]: Terminal UI: key handling and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
