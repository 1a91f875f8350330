pub mod item;
pub mod location;
pub mod npc;
pub mod player;
pub mod room;
