use clap::Parser;
use roomwalk::models::player::Player;
use roomwalk::output::Output;
use roomwalk::{Game, world};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roomwalk", version, about = "A single-player text adventure")]
struct Args {
    /// Path to a world file (YAML). Uses the built-in world when omitted.
    #[arg(long)]
    world: Option<PathBuf>,

    /// Player name. Asked interactively when omitted.
    #[arg(long)]
    name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let world = match &args.world {
        Some(path) => world::load(path)?,
        None => world::builtin()?,
    };
    tracing::info!(title = %world.map.title, "world loaded");

    let mut out = Output::stdout();
    let mut input = io::stdin().lock();

    let name = match args.name {
        Some(name) => name,
        None => ask_name(&mut out, &mut input)?,
    };

    let player = Player::new(name, world.start);
    let mut game = Game::new(player, world.map, out);
    game.run(input)?;

    Ok(())
}

fn ask_name(out: &mut Output, input: &mut impl BufRead) -> io::Result<String> {
    out.prompt("What is your name?")?;
    let mut name = String::new();
    input.read_line(&mut name)?;
    let name = name.trim();
    Ok(if name.is_empty() { "Adventurer".to_string() } else { name.to_string() })
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().unwrap();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();
}
