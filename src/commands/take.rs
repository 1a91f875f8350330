use crate::commands::CommandResult;
use crate::game::Game;

/// Take one unit of an item from the NPC in the current room.
pub fn take(game: &mut Game, item_name: &str) -> CommandResult {
    let taken = game
        .map
        .room_at_mut(game.player.location)
        .and_then(|room| room.npc_mut())
        .and_then(|npc| npc.remove_from_inventory(item_name));

    match taken {
        Some(item) => {
            let name = item.name.clone();
            game.player.add_to_inventory(item);
            game.out.line(format!("{name} has been added to your inventory."))?;
        }
        None => {
            game.out.line("Sorry, that item isn't here.")?;
        }
    }
    Ok(())
}
