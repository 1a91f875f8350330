use crate::commands::CommandResult;
use crate::game::Game;

pub fn display_map(game: &mut Game) -> CommandResult {
    let lines = game.map.render(game.player.location);
    game.out.lines(lines)?;
    Ok(())
}
