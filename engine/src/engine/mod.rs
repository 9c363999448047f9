// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod coding;
mod constants;
mod grid;
mod moves;

/**
 * Curated board-model public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use coding::{
    format_move, format_placement, format_tile, parse_color, parse_move, parse_orientation,
    parse_placement, parse_tile,
};
pub use constants::{COLORS, HEIGHT, WIDTH};
pub use grid::{
    adjacent, calc_fixed, empty_grid, execute_move, generate_placements, is_game_over, is_valid,
    overlap, Grid,
};
pub use moves::{Move, Orientation, Placement, Tile, INITIAL_PLACEMENT, ORIENTATIONS};
