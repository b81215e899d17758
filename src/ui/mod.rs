//! Terminal front-end: forwards key presses to the engine and draws the
//! resulting game state.

mod app;
mod game_view;

pub use app::{outcome_message, App};
