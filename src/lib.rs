pub mod commands;
pub mod error;
pub mod game;
pub mod input;
pub mod map;
pub mod models;
pub mod output;
pub mod world;

// Convenient re-exports (so call sites can do `roomwalk::Game`, etc.)
pub use commands::process_command;
pub use error::{AppResult, GameError};
pub use game::{Game, GameState};
