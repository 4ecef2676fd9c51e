//! Headless autoplayer: plays games with uniformly random slides and prints
//! how far they got. Handy as a smoke test and a rough engine benchmark.

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{ensure, Result};
use clap::Parser;
use log::{debug, info};
use rand::Rng;

use tui_2048::core::{new_game, seeded_rng, GameState};
use tui_2048::logging;
use tui_2048::types::Direction;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Play 2048 with random slides and report move counts and max tiles"
)]
struct Cli {
    /// Number of games to play
    #[arg(long, value_name = "N", default_value_t = 100)]
    games: u32,

    /// Seed for slides and spawns (random if omitted)
    #[arg(long, env = "TUI_2048_SEED", value_name = "N")]
    seed: Option<u64>,

    /// Give up on a game after this many slide attempts
    #[arg(long, value_name = "N", default_value_t = 100_000)]
    max_slides: u32,

    /// Print the final board of every game
    #[arg(long)]
    print_boards: bool,
}

struct GameResult {
    moves: u32,
    max_tile: u32,
    finished: bool,
}

fn play_one<R: Rng + ?Sized>(rng: &mut R, max_slides: u32) -> (GameState, GameResult) {
    let mut state = new_game(rng);
    let mut slides = 0;
    while !state.game_over() && slides < max_slides {
        let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        state.apply_move(direction, rng);
        slides += 1;
    }
    let result = GameResult {
        moves: state.move_count(),
        max_tile: state.board().max_tile().map_or(0, |t| t.value()),
        finished: state.game_over(),
    };
    (state, result)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr();
    ensure!(cli.games > 0, "--games must be at least 1");

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("autoplay: {} games, seed {}", cli.games, seed);
    let mut rng = seeded_rng(seed);

    let started = Instant::now();
    let mut results = Vec::with_capacity(cli.games as usize);
    for game in 0..cli.games {
        let (state, result) = play_one(&mut rng, cli.max_slides);
        debug!(
            "game {}: {} moves, max tile {}",
            game, result.moves, result.max_tile
        );
        if cli.print_boards {
            println!("game {} ({} moves)\n{}\n", game, result.moves, state.board());
        }
        results.push(result);
    }
    let elapsed = started.elapsed();

    let total_moves: u64 = results.iter().map(|r| u64::from(r.moves)).sum();
    let unfinished = results.iter().filter(|r| !r.finished).count();
    let mut by_max_tile: BTreeMap<u32, u32> = BTreeMap::new();
    for r in &results {
        *by_max_tile.entry(r.max_tile).or_default() += 1;
    }

    println!("games:        {}", results.len());
    println!("seed:         {}", seed);
    println!(
        "mean moves:   {:.1}",
        total_moves as f64 / results.len() as f64
    );
    if unfinished > 0 {
        println!("unfinished:   {} (hit --max-slides)", unfinished);
    }
    println!("max tile distribution:");
    for (tile, count) in &by_max_tile {
        println!("  {:>6}  {}", tile, count);
    }
    info!(
        "played {} games in {:.2?} ({:.0} moves/s)",
        results.len(),
        elapsed,
        total_moves as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );
    Ok(())
}
