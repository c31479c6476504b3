use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_n::ai::{AlphaBeta, Depth, Minimax, PruneRule, SearchStrategy};
use connect_n::game::GameState;

/// Score every move from a position with each search engine.
#[derive(Parser)]
#[command(name = "analyze", about = "Compare minimax and alpha-beta on a position")]
struct Cli {
    /// Position file (rows top first, X/O/.); empty board when omitted
    #[arg(long)]
    position: Option<PathBuf>,

    /// Board rows for the empty board
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Board columns for the empty board
    #[arg(long, default_value_t = 7)]
    cols: usize,

    /// Pieces in a row needed to win
    #[arg(long, default_value_t = 4)]
    win_length: usize,

    /// Search depth limit; omit to search to the end of the game
    #[arg(long)]
    depth: Option<u32>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let state = match &cli.position {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading position from {}", path.display()))?;
            let rows: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            GameState::from_rows(&rows, cli.win_length)?
        }
        None => GameState::new(cli.rows, cli.cols, cli.win_length)?,
    };
    if let Some(outcome) = state.winner() {
        bail!("position is already decided: {outcome:?}");
    }

    let depth = Depth::from(cli.depth);
    println!("{state}");
    println!("{} to move, depth {depth}", state.next_player().name());
    println!(
        "{:>6} {:>8} {:>10} {:>8} {:>10} {:>8} {:>8} {:>8}",
        "column", "minimax", "nodes", "bounded", "nodes", "pruned", "sibling", "pruned"
    );

    let mut minimax = Minimax::new();
    let mut bounded = AlphaBeta::new(PruneRule::Bounded);
    let mut sibling = AlphaBeta::new(PruneRule::Sibling);

    for (column, child) in state.successors() {
        let value = minimax.search(&child, depth);
        let minimax_nodes = minimax.nodes();
        let b = bounded.search_prune(&child, depth);
        let bounded_nodes = bounded.nodes();
        let s = sibling.search_prune(&child, depth);
        println!(
            "{column:>6} {value:>8} {minimax_nodes:>10} {:>8} {bounded_nodes:>10} {:>8} {:>8} {:>8}",
            b.value,
            b.pruned.len(),
            s.value,
            s.pruned.len()
        );
    }

    Ok(())
}

