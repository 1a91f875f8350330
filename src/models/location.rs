use serde::{Deserialize, Serialize};

/// Grid coordinate. Value type: two locations name the same cell iff both
/// components match, which is what makes it usable as the map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: u32,
    pub y: u32,
}

impl Location {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`. Produces a new value; callers
    /// must have checked movement legality first (stepping south or west off
    /// the zero edge would underflow).
    pub fn step(self, dir: Direction) -> Location {
        match dir {
            Direction::North => Location::new(self.x, self.y + 1),
            Direction::South => Location::new(self.x, self.y - 1),
            Direction::East => Location::new(self.x + 1, self.y),
            Direction::West => Location::new(self.x - 1, self.y),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// The four directions the grammar knows about. No diagonals, no up/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Parse a bare direction word. Matching is exact and lowercase; the
    /// parser does not fold case for command keywords.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            "east" => Some(Direction::East),
            "west" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}
