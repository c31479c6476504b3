use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use connect_n::ai::{AgentKind, PruneRule};
use connect_n::config::AppConfig;
use connect_n::driver::{play_game, SeriesTally};
use connect_n::game::{GameOutcome, GameState, Player};

/// Play Connect-N between any two agents.
#[derive(Parser)]
#[command(name = "connect-n", about = "Play a Connect-N game between two agents")]
struct Cli {
    /// Player 1 agent: r(andom), h(uman), c(omputer) or p(rune)
    player_one: Option<AgentKind>,

    /// Player 2 agent: r(andom), h(uman), c(omputer) or p(rune)
    player_two: Option<AgentKind>,

    /// Search depth limit; omit to search to the end of the game
    depth: Option<u32>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the number of pieces in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Pruning rule for the prune agent: bounded or sibling
    #[arg(long)]
    prune_rule: Option<PruneRule>,

    /// Number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Seed for random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a position file (rows top first, X/O/.)
    #[arg(long)]
    position: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(kind) = cli.player_one {
        config.players.one = kind;
    }
    if let Some(kind) = cli.player_two {
        config.players.two = kind;
    }
    if cli.depth.is_some() {
        config.search.depth = cli.depth;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(win_length) = cli.win_length {
        config.board.win_length = win_length;
    }
    if let Some(rule) = cli.prune_rule {
        config.search.prune_rule = rule;
    }
    if let Some(games) = cli.games {
        config.players.games = games;
    }
    if cli.seed.is_some() {
        config.players.seed = cli.seed;
    }
    config.validate()?;

    let start = match &cli.position {
        Some(path) => load_position(path, config.board.win_length)?,
        None => config.initial_state()?,
    };

    let mut tally = SeriesTally::new();
    for game in 0..config.players.games {
        let seed = config.players.seed.map(|s| s.wrapping_add(game as u64 * 2));
        let mut one = config.players.one.build(config.search.prune_rule, seed);
        let mut two = config
            .players
            .two
            .build(config.search.prune_rule, seed.map(|s| s.wrapping_add(1)));

        println!("{start}");
        let record = play_game(
            one.as_mut(),
            two.as_mut(),
            config.search.depth(),
            start.clone(),
            |m, state| {
                println!("Turn {}: {} moves {}", m.turn, m.player.name(), m.column);
                println!("{state}");
            },
        )
        .with_context(|| format!("playing game {}", game + 1))?;

        match record.outcome {
            GameOutcome::Draw => println!("It's a tie."),
            GameOutcome::Winner(Player::One) => println!("Player 1 wins!"),
            GameOutcome::Winner(Player::Two) => println!("Player 2 wins!"),
        }
        tally.record(&record);
    }

    if tally.games() > 1 {
        println!(
            "{} games: Player 1 {} / Player 2 {} / draws {} (avg {:.1} moves)",
            tally.games(),
            tally.player_one_wins,
            tally.player_two_wins,
            tally.draws,
            tally.average_length()
        );
    }

    Ok(())
}

fn load_position(path: &Path, win_length: usize) -> Result<GameState> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading position from {}", path.display()))?;
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    GameState::from_rows(&rows, win_length)
        .with_context(|| format!("parsing position in {}", path.display()))
}
