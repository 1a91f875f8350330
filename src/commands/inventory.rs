use crate::commands::CommandResult;
use crate::game::Game;

pub fn print_inventory(game: &mut Game) -> CommandResult {
    match game.player.inventory_lines() {
        Some(lines) => {
            game.out.line("INVENTORY")?;
            game.out.line("=========")?;
            game.out.lines(lines)?;
        }
        None => {
            game.out.line("Sorry, your inventory is empty!")?;
            game.out
                .line("Why not look around and see if you can find something to pick up!")?;
        }
    }
    Ok(())
}
