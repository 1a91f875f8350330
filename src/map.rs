use crate::error::WorldError;
use crate::models::location::{Direction, Location};
use crate::models::room::Room;
use std::collections::HashMap;

/// The bounded collection of rooms, keyed by location.
///
/// The bounding box is the componentwise maximum over all room locations.
/// The grid is not guaranteed rectangular: a cell inside the box with no room
/// is a hole, and movement legality deliberately does not look at holes (see
/// `valid_directions`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub title: String,
    rooms: HashMap<Location, Room>,
    /// Insertion order of the room list, kept for rendering. The backing
    /// HashMap iterates in arbitrary order.
    order: Vec<Location>,
    max_x: u32,
    max_y: u32,
}

/// Which of the four moves stay inside the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidDirections {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl ValidDirections {
    pub fn allows(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }
}

impl Map {
    /// Index the room list by location and compute the bounding box. Two
    /// rooms on the same cell make the world ambiguous; that is a
    /// construction fault, reported before the game loop ever starts.
    pub fn build(title: impl Into<String>, room_list: Vec<Room>) -> Result<Map, WorldError> {
        let mut rooms = HashMap::with_capacity(room_list.len());
        let mut order = Vec::with_capacity(room_list.len());
        let mut max_x = 0;
        let mut max_y = 0;

        for room in room_list {
            let loc = room.location;
            max_x = max_x.max(loc.x);
            max_y = max_y.max(loc.y);

            if rooms.insert(loc, room).is_some() {
                return Err(WorldError::DuplicateRoom { x: loc.x, y: loc.y });
            }
            order.push(loc);
        }

        Ok(Map {
            title: title.into(),
            rooms,
            order,
            max_x,
            max_y,
        })
    }

    /// Exact lookup. In-bounds holes come back as None.
    pub fn room_at(&self, loc: Location) -> Option<&Room> {
        self.rooms.get(&loc)
    }

    pub fn room_at_mut(&mut self, loc: Location) -> Option<&mut Room> {
        self.rooms.get_mut(&loc)
    }

    /// Legal moves from `loc`, as a pure bounding-box check. Whether the
    /// destination cell actually has a room is not consulted; walking into a
    /// hole is allowed and the command handlers deal with the empty cell.
    pub fn valid_directions(&self, loc: Location) -> ValidDirections {
        ValidDirections {
            north: loc.y < self.max_y,
            south: loc.y > 0,
            east: loc.x < self.max_x,
            west: loc.x > 0,
        }
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.max_x, self.max_y)
    }

    /// Rooms in insertion order of the original room list.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|loc| self.rooms.get(loc))
    }

    /// Display lines for the map: title, a rule sized to it, then one
    /// numbered line per room, flagging the player's cell.
    pub fn render(&self, player_at: Location) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.order.len() + 2);
        lines.push(self.title.clone());
        lines.push("=".repeat(self.title.len()));
        for (ix, room) in self.rooms().enumerate() {
            if room.location == player_at {
                lines.push(format!("{}. {}. You are here.", ix, room.name));
            } else {
                lines.push(format!("{}. {}", ix, room.name));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(x: u32, y: u32, name: &str) -> Room {
        Room::new(Location::new(x, y), name, format!("{name} description"), vec![], None)
    }

    fn small_map() -> Map {
        Map::build(
            "Liz's Great Adventure",
            vec![
                room(0, 2, "top left"),
                room(1, 2, "top center"),
                room(2, 2, "top right"),
                room(0, 1, "middle left"),
                room(1, 1, "middle center"),
                room(2, 1, "middle right"),
                room(0, 0, "bottom left"),
                room(1, 0, "bottom center"),
                room(2, 0, "bottom right"),
            ],
        )
        .expect("small map builds")
    }

    #[test]
    fn looks_up_rooms_by_coordinates() {
        let map = small_map();
        assert_eq!(map.room_at(Location::new(0, 2)).map(|r| r.name.as_str()), Some("top left"));
        assert!(map.room_at(Location::new(7, 7)).is_none());
    }

    #[test]
    fn valid_directions_for_top_left() {
        let v = small_map().valid_directions(Location::new(0, 2));
        assert_eq!(
            v,
            ValidDirections {
                north: false,
                south: true,
                east: true,
                west: false,
            }
        );
    }

    #[test]
    fn valid_directions_for_bottom_right() {
        let v = small_map().valid_directions(Location::new(2, 0));
        assert_eq!(
            v,
            ValidDirections {
                north: true,
                south: false,
                east: false,
                west: true,
            }
        );
    }

    #[test]
    fn valid_directions_for_the_middle() {
        let v = small_map().valid_directions(Location::new(1, 1));
        assert!(v.north && v.south && v.east && v.west);
    }

    #[test]
    fn origin_never_allows_south_or_west() {
        // Holds regardless of what the grid contains.
        let v = small_map().valid_directions(Location::new(0, 0));
        assert!(!v.south);
        assert!(!v.west);

        let lonely = Map::build("Tiny", vec![room(0, 0, "only")]).expect("builds");
        let v = lonely.valid_directions(Location::new(0, 0));
        assert!(!v.north && !v.south && !v.east && !v.west);
    }

    #[test]
    fn no_direction_leaves_the_bounding_box() {
        let map = small_map();
        let (max_x, max_y) = map.bounds();
        for x in 0..=max_x {
            for y in 0..=max_y {
                let loc = Location::new(x, y);
                let v = map.valid_directions(loc);
                for dir in [Direction::North, Direction::South, Direction::East, Direction::West] {
                    if v.allows(dir) {
                        let next = loc.step(dir);
                        assert!(next.x <= max_x && next.y <= max_y);
                    }
                }
            }
        }
    }

    #[test]
    fn bounds_ignore_holes() {
        // Non-rectangular grid: the box is still the componentwise max, and
        // moving toward a hole is legal.
        let map = Map::build("Holes", vec![room(0, 0, "a"), room(2, 2, "b")]).expect("builds");
        assert_eq!(map.bounds(), (2, 2));
        let v = map.valid_directions(Location::new(0, 0));
        assert!(v.north && v.east);
        assert!(map.room_at(Location::new(0, 1)).is_none());
    }

    #[test]
    fn duplicate_location_is_a_construction_fault() {
        let err = Map::build("Dup", vec![room(1, 1, "a"), room(1, 1, "b")]).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom { x: 1, y: 1 }));
    }

    #[test]
    fn empty_room_list_defaults_bounds_to_zero() {
        let map = Map::build("Empty", vec![]).expect("builds");
        assert_eq!(map.bounds(), (0, 0));
    }

    #[test]
    fn render_numbers_rooms_in_insertion_order() {
        let map = Map::build("Mini", vec![room(1, 0, "first"), room(0, 0, "second")]).expect("builds");
        let lines = map.render(Location::new(0, 0));
        assert_eq!(lines[0], "Mini");
        assert_eq!(lines[1], "====");
        assert_eq!(lines[2], "0. first");
        assert_eq!(lines[3], "1. second. You are here.");
    }
}
