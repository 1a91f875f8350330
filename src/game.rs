use crate::commands::process_command;
use crate::error::AppResult;
use crate::map::Map;
use crate::models::player::Player;
use crate::output::Output;
use std::io::BufRead;

/// Controller states. Exited is terminal; there is nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Exited,
}

/// The game controller: owns the player and the map, runs the
/// read-parse-dispatch loop, and is the only thing that mutates world state.
/// Strictly single-threaded; the one suspension point is the blocking read
/// of the next input line.
pub struct Game {
    pub(crate) player: Player,
    pub(crate) map: Map,
    pub(crate) state: GameState,
    pub(crate) out: Output,
}

impl Game {
    pub fn new(player: Player, map: Map, out: Output) -> Self {
        Self {
            player,
            map,
            state: GameState::Playing,
            out,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Show the map, greet the player, then read-parse-dispatch until the
    /// player exits or the input stream ends.
    pub fn run(&mut self, mut input: impl BufRead) -> AppResult<()> {
        let map_lines = self.map.render(self.player.location);
        self.out.lines(map_lines)?;
        self.out
            .prompt(format!("Hi, {}. What would you like to do?", self.player.name))?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF: the session is over even without an explicit exit.
                tracing::debug!("input stream closed");
                break;
            }
            process_command(self, line.trim_end_matches(['\r', '\n']))?;
            if self.state == GameState::Exited {
                break;
            }
            self.out.prompt("What now?")?;
        }
        Ok(())
    }

    /// One command against the current state, exactly as the run loop would
    /// apply it. Public so scripted sessions and tests can drive the game
    /// without a reader.
    pub fn execute(&mut self, raw: &str) -> AppResult<()> {
        process_command(self, raw)?;
        Ok(())
    }

    pub(crate) fn exit(&mut self) -> std::io::Result<()> {
        self.state = GameState::Exited;
        self.out.line(format!("Bye, {}! Thanks for playing!", self.player.name))
    }

    // Win/lose conditions are not wired to any command yet; the stubs exist
    // so a future world rule can end the session.
    #[allow(unused)]
    pub(crate) fn win(&mut self) -> std::io::Result<()> {
        self.state = GameState::Exited;
        self.out
            .line(format!("Congratulations, {}! You win.", self.player.name))
    }

    #[allow(unused)]
    pub(crate) fn lose(&mut self) -> std::io::Result<()> {
        self.state = GameState::Exited;
        self.out.line(format!(
            "Sorry, {}. You lose. Better luck next time!",
            self.player.name
        ))
    }
}
