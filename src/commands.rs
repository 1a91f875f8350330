use crate::game::Game;
use crate::input::parser::{Command, parse_command};
use thiserror::Error;

mod go;
mod inventory;
mod look;
mod map;
mod pick_up;
mod take;
mod talk;
mod use_item;

pub type CommandResult = Result<(), CommandError>;

/// Failures a handler can actually produce. Player mistakes are messages,
/// not errors; all that is left is the output stream going away.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse one raw input line and dispatch it. Unrecognised input is reported
/// and changes nothing; every other arm is a closed, statically known
/// handler.
pub fn process_command(game: &mut Game, raw: &str) -> CommandResult {
    let cmd = parse_command(raw);
    tracing::debug!(?cmd, "dispatching command");

    match cmd {
        Command::Move(dir) => go::go(game, dir),
        Command::PickUp(item) => pick_up::pick_up(game, &item),
        Command::Take(item) => take::take(game, &item),
        Command::Use(item) => use_item::use_item(game, &item),
        Command::Talk => talk::talk(game),
        Command::LookAround => look::look_around(game),
        Command::DisplayMap => map::display_map(game),
        Command::PrintInventory => inventory::print_inventory(game),
        Command::Help => {
            game.out.lines(HELP_TEXT)?;
            Ok(())
        }
        Command::Exit => {
            game.exit()?;
            Ok(())
        }
        Command::Invalid(input) => {
            tracing::debug!(%input, "unrecognised input");
            game.out.line("That is not a valid choice. Try again.")?;
            Ok(())
        }
    }
}

/// Static command reference for `help`. Informational only.
const HELP_TEXT: [&str; 9] = [
    "exit: exit the game",
    "north, south, east, west: move in this direction",
    "look around: see a description of the current room",
    "pick up _item_: add the item to your inventory",
    "take _item_: take an item from an NPC",
    "use _item_: use an item in your inventory",
    "talk: talk to an NPC",
    "display map: look at map",
    "print inventory: show current player inventory",
];
