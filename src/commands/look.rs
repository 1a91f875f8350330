use crate::commands::CommandResult;
use crate::game::Game;

pub fn look_around(game: &mut Game) -> CommandResult {
    let Some(room) = game.map.room_at(game.player.location) else {
        // Bounding-box movement lets the player walk into a cell with no
        // room behind it.
        game.out.line("There is nothing here. Empty space stretches in every direction.")?;
        return Ok(());
    };

    let description = room.description.clone();
    let items = room.has_items().then(|| room.item_list());
    let npc_name = room.npc().map(|npc| npc.name.clone());

    game.out.line(description)?;
    if let Some(list) = items {
        game.out.line(format!("This room contains {list}"))?;
    }
    if let Some(name) = npc_name {
        game.out.line(format!("{name} is here too."))?;
    }
    Ok(())
}
