// player/src/main.rs
#![forbid(unsafe_code)]

mod game;
mod logging;
mod timer;

use std::process::exit;

use clap::Parser;
use indicatif::ProgressBar;
use rand::prelude::*;

use box_engine::{
    calculate_best_first_moves, format_table_source, Analysis, ScoreWeights, DEFAULT_SCORE_WEIGHTS,
};

use crate::game::GameOptions;

const PLAYER_NAME: &str = "rustbox";

#[derive(Parser, Debug)]
#[command(name = "box-player")]
struct Args {
    /// Search deeper (2 ply instead of default 1).
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    deep: bool,

    /// Guess the opponent's secret color (instead of considering all
    /// possibilities).
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    guess: bool,

    /// Use the precomputed first-move table on the first own turn.
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    first_move_table: bool,

    /// Attempt a third search ply when fewer than this many placements
    /// remain (0 disables it). Requires --deep and --guess.
    #[arg(long, default_value_t = 0)]
    extra_ply: u32,

    /// Advisory time budget in seconds, used to gate the extra ply (0
    /// disables time-based decisions). Should be slightly below the
    /// official limit to account for overhead.
    #[arg(long, default_value_t = 0)]
    time_limit: u64,

    /// Random seed in hexadecimal format. If empty, pick randomly. The
    /// chosen seed is logged to stderr for reproducibility.
    #[arg(long, default_value = "")]
    seed: String,

    /// Weights used by the evaluation function:
    /// base4,fixed4,base3,fixed3,base2,fixed2,base1,fixed1.
    #[arg(long, value_name = "WEIGHTS")]
    score_weights: Option<String>,

    /// Precompute the first-move table, print its source to stdout, and
    /// exit.
    #[arg(long)]
    precompute_first_moves: bool,
}

fn main() {
    logging::init();
    logging::log_id('R', PLAYER_NAME);

    let args = Args::parse();

    let weights = match &args.score_weights {
        None => DEFAULT_SCORE_WEIGHTS,
        Some(s) => match ScoreWeights::parse(s) {
            Some(weights) => weights,
            None => {
                log::error!("Could not parse score weights: [{s}]");
                exit(1);
            }
        },
    };
    if args.extra_ply > 0 && !(args.deep && args.guess) {
        log::error!("--extra-ply requires --deep true and --guess true");
        exit(1);
    }

    let analysis = Analysis::new(weights);

    if args.precompute_first_moves {
        let bar = ProgressBar::new(0);
        let table = calculate_best_first_moves(&analysis, |done, total| {
            bar.set_length(total as u64);
            bar.set_position(done as u64);
        });
        bar.finish();
        print!("{}", format_table_source(&table));
        return;
    }

    let seed = if args.seed.is_empty() {
        rand::thread_rng().gen()
    } else {
        match u64::from_str_radix(&args.seed, 16) {
            Ok(seed) => seed,
            Err(_) => {
                log::error!("Could not parse RNG seed: [{}]", args.seed);
                exit(1);
            }
        }
    };
    logging::log_seed(seed);
    let rng = StdRng::seed_from_u64(seed);

    let opts = GameOptions {
        deep: args.deep,
        guess: args.guess,
        first_move_table: args.first_move_table,
        extra_ply: args.extra_ply,
        time_limit: args.time_limit,
    };
    game::play_game(&analysis, &opts, rng);
}
