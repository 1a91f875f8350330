use crate::commands::CommandResult;
use crate::game::Game;

/// Use an item: it must be in the player's inventory AND present in the
/// current room (its item list first, then the NPC's inventory) so the
/// effect text can be read. Only the player's copy is consumed; the source
/// container is left untouched, and the player's inventory stays the sole
/// source of truth for "still usable".
pub fn use_item(game: &mut Game, item_name: &str) -> CommandResult {
    if !game.player.has_item(item_name) {
        game.out.line(
            "Sorry, that item is not in your inventory. Did you pick it up or try taking it from someone?",
        )?;
        return Ok(());
    }

    let effect = game.map.room_at(game.player.location).and_then(|room| {
        room.find_item(item_name)
            .or_else(|| room.npc().and_then(|npc| npc.find_item(item_name)))
            .map(|item| item.effect.clone())
    });

    match effect {
        Some(effect) => {
            game.out.line(effect)?;
            game.player.remove_from_inventory(item_name);
        }
        None => {
            game.out.line(
                "Sorry, that item is not in your inventory. Did you pick it up or try taking it from someone?",
            )?;
        }
    }
    Ok(())
}
