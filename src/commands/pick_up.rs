use crate::commands::CommandResult;
use crate::game::Game;

/// Move one unit of an item from the current room into the player's
/// inventory. Failure never mutates anything: asking twice for a missing
/// item gives the same answer twice.
pub fn pick_up(game: &mut Game, item_name: &str) -> CommandResult {
    let removed = game
        .map
        .room_at_mut(game.player.location)
        .and_then(|room| room.remove_one(item_name));

    match removed {
        Some(item) => {
            let name = item.name.clone();
            game.player.add_to_inventory(item);
            game.out.line(format!("{name} has been added to your inventory."))?;
        }
        None => {
            game.out.line("Sorry, that item is not in this room. Try again.")?;
        }
    }
    Ok(())
}
