use crate::commands::CommandResult;
use crate::game::Game;

pub fn talk(game: &mut Game) -> CommandResult {
    let dialogue = game
        .map
        .room_at(game.player.location)
        .and_then(|room| room.npc())
        .map(|npc| npc.default_dialogue().to_string());

    match dialogue {
        Some(line) => game.out.line(line)?,
        None => game.out.line("Sorry, no one else is in here!")?,
    }
    Ok(())
}
