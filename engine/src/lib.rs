// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod policy;

// Re-export the bits the player binary needs:
pub use engine::{
    adjacent, calc_fixed, empty_grid, execute_move, format_move, format_placement, format_tile,
    generate_placements, is_game_over, is_valid, overlap, parse_color, parse_move, parse_placement,
    parse_tile, Grid, Move, Orientation, Placement, Tile, COLORS, HEIGHT, INITIAL_PLACEMENT,
    ORIENTATIONS, WIDTH,
};

pub use policy::{
    calculate_best_first_moves, evaluate_extra_ply, evaluate_final_score, evaluate_second_ply,
    evaluate_second_ply_naive, extra_ply_cost_estimate_ms, find_best_placements,
    format_table_source, generate_relevant_tiles, lookup_first_move, random_sample, Analysis,
    ScoreMode, ScoreWeights, SecretColorGuesser, DEFAULT_SCORE_WEIGHTS, RELEVANT_TILE_COUNT,
};
