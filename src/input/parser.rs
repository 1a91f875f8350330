//! Command parser for the free-text game prompt.
//!
//! Examples:
//!   "move north"        -> Command::Move(North)
//!   "north"             -> Command::Move(North)
//!   "pick up a puppy"   -> Command::PickUp("a puppy")
//!   "take vial"         -> Command::Take("vial")
//!   "look around"       -> Command::LookAround
//!   "banana"            -> Command::Invalid("banana")
//!
//! Multi-word commands are recognised by substring containment in a fixed
//! priority order (move, pick up, take, use); whatever remains after removing
//! the command's own tokens is the argument. Everything else is matched, with
//! spaces folded to underscores, against the closed single-word vocabulary.
//! Keywords are case-sensitive: the canonical forms are lowercase.

use crate::models::location::Direction;

/// Everything the player can ask for, as a closed set. The dispatcher is a
/// single `match` over this; nothing is looked up dynamically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    PickUp(String),
    Take(String),
    Use(String),
    Talk,
    LookAround,
    DisplayMap,
    PrintInventory,
    Help,
    Exit,
    /// Anything we did not recognise, normalized. The dispatcher reports it
    /// and changes nothing.
    Invalid(String),
}

pub fn parse_command(input: &str) -> Command {
    // Normalize whitespace only; case is preserved so item names survive
    // exactly as typed.
    let tokens: Vec<&str> = input.split(' ').filter(|t| !t.is_empty()).collect();
    let normalized = tokens.join(" ");

    // Multi-word forms, fixed priority, first match wins.
    if normalized.contains("move")
        && let Some(dir) = tokens.last().and_then(|t| Direction::parse(t))
    {
        return Command::Move(dir);
    }
    if normalized.contains("pick up") {
        return Command::PickUp(strip_tokens(&tokens, &["pick", "up"]));
    }
    if normalized.contains("take") {
        return Command::Take(strip_tokens(&tokens, &["take"]));
    }
    if normalized.contains("use") {
        return Command::Use(strip_tokens(&tokens, &["use"]));
    }

    // Single-word vocabulary, matched against the underscore-joined input so
    // "look around" and "display map" land on their canonical names.
    let joined = tokens.join("_");
    match joined.as_str() {
        "help" => Command::Help,
        "exit" => Command::Exit,
        "north" => Command::Move(Direction::North),
        "south" => Command::Move(Direction::South),
        "east" => Command::Move(Direction::East),
        "west" => Command::Move(Direction::West),
        "display_map" => Command::DisplayMap,
        "look_around" => Command::LookAround,
        "print_inventory" => Command::PrintInventory,
        "talk" => Command::Talk,
        _ => Command::Invalid(normalized),
    }
}

/// Rebuild the argument by removing the command's own tokens, wherever they
/// appear, and rejoining the rest with single spaces. Order-insensitive token
/// removal, not substring slicing.
fn strip_tokens(tokens: &[&str], keywords: &[&str]) -> String {
    tokens
        .iter()
        .filter(|t| !keywords.contains(t))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
