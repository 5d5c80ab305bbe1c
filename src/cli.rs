//! Command-line configuration of the game.

use std::path::PathBuf;

use clap::Parser;

use crate::{animation::DEFAULT_CARVE_DELAY_MS, types::Difficulty};

/// Race through a freshly carved maze before the clock or your moves run out.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of maze columns.
    #[arg(long, default_value_t = 20)]
    pub width: usize,

    /// Number of maze rows.
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Seed for the maze generator; a random seed is drawn (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Always play at this difficulty instead of asking before each round.
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Delay between two carving steps of the generation animation, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_CARVE_DELAY_MS)]
    pub carve_delay_ms: u64,

    /// Append logs to this file. Nothing is logged otherwise.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
