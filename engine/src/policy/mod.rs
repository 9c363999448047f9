// engine/src/policy/mod.rs
#![forbid(unsafe_code)]

mod evaluate;
mod first_move;
mod first_move_table;
mod guess;
mod search;
mod select;

/**
 * Curated decision-engine public API.
 *
 * Internal implementation modules remain private; only stable entrypoints are re-exported.
 */
pub use evaluate::{evaluate_final_score, Analysis, ScoreWeights, DEFAULT_SCORE_WEIGHTS};
pub use first_move::{calculate_best_first_moves, format_table_source, lookup_first_move};
pub use guess::SecretColorGuesser;
pub use search::{
    evaluate_extra_ply, evaluate_second_ply, evaluate_second_ply_naive,
    extra_ply_cost_estimate_ms, generate_relevant_tiles, RELEVANT_TILE_COUNT,
};
pub use select::{find_best_placements, random_sample, ScoreMode};
