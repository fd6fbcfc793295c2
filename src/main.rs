//! Console front-end: read settings, create two players, play rounds until
//! the user stops.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use number_game::{
    GameConfig, GameError, GameRng, GameSession, Player, Result, StdioInput, Strategy,
    StrategyKind,
};

/// Two-player race to a goal number
#[derive(Parser, Debug)]
#[command(name = "number-game")]
#[command(about = "Take turns adding to a shared count; reach the goal to win", long_about = None)]
#[command(version)]
struct Cli {
    /// Amount to reach in order to win
    #[arg(long)]
    goal: Option<i64>,

    /// Minimum legal move
    #[arg(long)]
    min_step: Option<i64>,

    /// Maximum legal move
    #[arg(long)]
    max_step: Option<i64>,

    /// Seed for random players (defaults to OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Name of the first player
    #[arg(long)]
    p1_name: Option<String>,

    /// Type of the first player (random/user/strategic)
    #[arg(long)]
    p1_type: Option<String>,

    /// Name of the second player
    #[arg(long)]
    p2_name: Option<String>,

    /// Type of the second player (random/user/strategic)
    #[arg(long)]
    p2_type: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let goal = value_or_prompt(cli.goal, "Enter goal amount: ")?;
    let min_step = value_or_prompt(cli.min_step, "Enter minimum move: ")?;
    let max_step = value_or_prompt(cli.max_step, "Enter maximum move: ")?;
    let config = GameConfig::new(goal, min_step, max_step)?;
    debug!(%config, "configured");

    let mut rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };

    let p1 = make_player("p1", cli.p1_name, cli.p1_type, &mut rng)?;
    let p2 = make_player("p2", cli.p2_name, cli.p2_type, &mut rng)?;
    let mut players = [p1, p2];

    loop {
        let mut session = GameSession::new(config, &mut players);
        let winner = session.play_round_with(|report| {
            println!("{} moves {}.", report.name, report.amount);
            println!("Total is now {}.", report.total);
        })?;
        println!("And {} is the winner!!!", winner);

        if prompt("Again? (y/n) ")?.trim() != "y" {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

/// Build a player from flags, prompting for whatever is missing.
///
/// Unknown player types fall back to a random player.
fn make_player(
    label: &str,
    name: Option<String>,
    kind: Option<String>,
    rng: &mut GameRng,
) -> Result<Player<Strategy>> {
    let name = match name {
        Some(name) => name,
        None => prompt(&format!("Enter a name {}: ", label))?.trim().to_string(),
    };
    let kind = match kind {
        Some(kind) => kind,
        None => prompt(&format!(
            "Select player type for {} (random/user/strategic): ",
            label
        ))?,
    };

    let kind = kind.parse::<StrategyKind>().unwrap_or_else(|err| {
        warn!(%err, "falling back to random player");
        println!("Invalid player type. Choosing RandomPlayer by default.");
        StrategyKind::Random
    });

    let strategy = match kind {
        StrategyKind::Random => Strategy::random(rng.fork()),
        StrategyKind::Interactive => Strategy::interactive(StdioInput::new()),
        StrategyKind::Greedy => Strategy::greedy(),
    };
    debug!(player = %name, %kind, "player created");

    Ok(Player::new(name, strategy))
}

fn value_or_prompt(value: Option<i64>, message: &str) -> Result<i64> {
    match value {
        Some(value) => Ok(value),
        None => {
            let raw = prompt(message)?;
            raw.trim().parse().map_err(|_| GameError::InputFormat {
                raw: raw.trim_end().to_string(),
            })
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", message)?;
    stdout.flush()?;

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(line)
}
