//! Command-line and environment configuration for the interactive game.
//!
//! Every flag can also be set through an environment variable:
//!
//! | Flag | Variable | Default |
//! |------|----------|---------|
//! | `--seed` | `TUI_2048_SEED` | fresh entropy per run |
//! | `--log-path` | `TUI_2048_LOG_PATH` | logging disabled |
//! | `--drag-dead-zone` | `TUI_2048_DRAG_DEAD_ZONE` | `0` |

use std::path::PathBuf;

use clap::Parser;

use crate::core::{entropy_rng, seeded_rng, GameRng};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
pub struct PlayArgs {
    /// Seed for tile spawns; omit for a different game every run
    #[arg(long, env = "TUI_2048_SEED", value_name = "N")]
    pub seed: Option<u64>,

    /// Append logs to this file (the terminal itself is busy drawing the board)
    #[arg(long, env = "TUI_2048_LOG_PATH", value_name = "FILE")]
    pub log_path: Option<PathBuf>,

    /// Ignore mouse drags shorter than this many columns (0 keeps every release)
    #[arg(
        long,
        env = "TUI_2048_DRAG_DEAD_ZONE",
        value_name = "CELLS",
        default_value_t = 0.0
    )]
    pub drag_dead_zone: f64,
}

impl PlayArgs {
    /// The spawn generator this configuration asks for
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => seeded_rng(seed),
            None => entropy_rng(),
        }
    }
}
