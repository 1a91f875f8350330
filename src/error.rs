use crate::commands::CommandError;
use thiserror::Error;

pub type AppResult<T> = Result<T, GameError>;

/// Application-level error. User-input faults never show up here; those are
/// plain messages to the player and the loop keeps going. What remains is
/// world construction going wrong and the output stream failing.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// World-construction faults. These abort startup before the game loop
/// begins; a session never starts on an inconsistent map.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("duplicate room at ({x}, {y})")]
    DuplicateRoom { x: u32, y: u32 },

    #[error("no room at start location ({x}, {y})")]
    MissingStartRoom { x: u32, y: u32 },

    #[error("NPC {npc:?} in room {room:?} has no \"default\" dialogue entry")]
    MissingDefaultDialogue { npc: String, room: String },

    #[error("failed to read world file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse world file: {0}")]
    Parse(#[from] serde_yaml::Error),
}
