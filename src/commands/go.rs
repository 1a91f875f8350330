use crate::commands::CommandResult;
use crate::game::Game;
use crate::models::location::Direction;

/// Move one cell. Legality is the map's bounding box only; an in-bounds cell
/// without a room is still a legal destination, and the other handlers treat
/// the empty cell as something to report, not a fault.
pub fn go(game: &mut Game, dir: Direction) -> CommandResult {
    let valid = game.map.valid_directions(game.player.location);
    if !valid.allows(dir) {
        game.out.line("Sorry, you can't move there!")?;
        return Ok(());
    }

    game.player.location = game.player.location.step(dir);
    game.out.line(format!(
        "You have moved {}! Your new location is {}.",
        dir.as_str(),
        game.player.location
    ))?;
    Ok(())
}
