//! The world loader: turns a declarative YAML room list into a validated
//! `Map` plus the player's start cell. The built-in world ships embedded in
//! the binary and goes through the exact same pipeline as a `--world` file,
//! so swapping the data source never touches the game logic.

use crate::error::WorldError;
use crate::map::Map;
use crate::models::item::InventoryItem;
use crate::models::location::Location;
use crate::models::npc::{DEFAULT_DIALOGUE_KEY, Npc};
use crate::models::room::Room;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_WORLD: &str = include_str!("../data/world.yaml");

/// A fully built, validated world: the map and where the player wakes up.
#[derive(Debug)]
pub struct World {
    pub map: Map,
    pub start: Location,
}

// ====== YAML models ======

#[derive(Debug, Deserialize)]
struct WorldFile {
    title: String,
    start: Location,
    rooms: Vec<RoomSpec>,
}

#[derive(Debug, Deserialize)]
struct RoomSpec {
    x: u32,
    y: u32,
    name: String,
    description: String,
    /// Room data may carry `~` placeholders from data entry; they mean
    /// "no item" and are dropped during construction.
    #[serde(default)]
    items: Vec<Option<ItemSpec>>,
    #[serde(default)]
    npc: Option<NpcSpec>,
}

#[derive(Debug, Deserialize)]
struct ItemSpec {
    name: String,
    #[serde(default = "default_count")]
    count: u32,
    effect: String,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
struct NpcSpec {
    name: String,
    #[serde(default)]
    inventory: Vec<ItemSpec>,
    dialogue: HashMap<String, String>,
}

// ====== Construction ======

/// The world compiled into the binary.
pub fn builtin() -> Result<World, WorldError> {
    parse(BUILTIN_WORLD)
}

/// A world from disk, for `--world <path>`.
pub fn load(path: impl AsRef<Path>) -> Result<World, WorldError> {
    let data = fs::read_to_string(path)?;
    parse(&data)
}

fn parse(data: &str) -> Result<World, WorldError> {
    let file: WorldFile = serde_yaml::from_str(data)?;
    build(file)
}

fn build(file: WorldFile) -> Result<World, WorldError> {
    let mut rooms = Vec::with_capacity(file.rooms.len());
    for spec in file.rooms {
        rooms.push(build_room(spec)?);
    }

    let map = Map::build(file.title, rooms)?;
    if map.room_at(file.start).is_none() {
        return Err(WorldError::MissingStartRoom {
            x: file.start.x,
            y: file.start.y,
        });
    }

    tracing::debug!(rooms = map.rooms().count(), start = %file.start, "world built");
    Ok(World {
        map,
        start: file.start,
    })
}

fn build_room(spec: RoomSpec) -> Result<Room, WorldError> {
    // Placeholder entries are normalized away here, once, instead of being
    // carried through the whole pipeline.
    let items: Vec<InventoryItem> = spec.items.into_iter().flatten().map(build_item).collect();

    let npc = match spec.npc {
        Some(n) => {
            if !n.dialogue.contains_key(DEFAULT_DIALOGUE_KEY) {
                return Err(WorldError::MissingDefaultDialogue {
                    npc: n.name,
                    room: spec.name,
                });
            }
            let inventory = n.inventory.into_iter().map(build_item).collect();
            Some(Npc::new(n.name, inventory, n.dialogue))
        }
        None => None,
    };

    Ok(Room::new(
        Location::new(spec.x, spec.y),
        spec.name,
        spec.description,
        items,
        npc,
    ))
}

fn build_item(spec: ItemSpec) -> InventoryItem {
    InventoryItem::new(spec.name, spec.count, spec.effect)
}
