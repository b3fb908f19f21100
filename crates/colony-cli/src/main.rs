//! Terminal frontend for Colony 4B.

mod logging;
mod map;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use colony_core::GameConfig;
use colony_fiction::narrative::FAREWELL;
use colony_fiction::{ColonySession, Flow};

use render::Screen;

#[derive(Parser)]
#[command(
    name = "colony",
    about = "Colony 4B: a text adventure in an underground mining colony",
    version
)]
struct Cli {
    /// RNG seed for mining draws and prophecies
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file overriding game constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file, truncated on every run
    #[arg(long, default_value = "game.log")]
    log_file: PathBuf,

    /// Skip the introduction
    #[arg(long)]
    no_intro: bool,

    /// Skip animation delays and "press enter" pauses
    #[arg(long)]
    fast: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_path(path)
            .map_err(|e| format!("invalid config {}: {e}", path.display()))?,
        None => GameConfig::default(),
    };
    Ok(match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

/// Next line from stdin, or `None` at end of input.
fn read_command() -> Result<Option<String>, String> {
    print!("\nEnter command: ");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line)),
        Err(e) => Err(e.to_string()),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;
    let _guard = logging::init(&cli.log_file)?;

    let mut session =
        ColonySession::new(config).map_err(|e| format!("failed to start game: {e}"))?;
    let screen = Screen::new(cli.fast, session.config());

    if !cli.no_intro {
        screen.intro(session.config())?;
    }
    screen.room(&mut session)?;

    loop {
        let Some(line) = read_command()? else {
            tracing::info!("input closed");
            println!("\n\n{FAREWELL}");
            break;
        };
        tracing::info!(input = line.trim(), "player input");

        let turn = session.process(&line);
        for cue in session.drain_cues() {
            screen.cue(&cue)?;
        }

        match turn.flow {
            Flow::Continue => screen.room(&mut session)?,
            Flow::Quit => {
                println!("\n\n{FAREWELL}");
                break;
            }
            Flow::Finished(ending) => {
                screen.ending(ending)?;
                break;
            }
        }
    }

    tracing::info!("session ended");
    Ok(())
}
