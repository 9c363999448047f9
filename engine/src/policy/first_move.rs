// engine/src/policy/first_move.rs
#![forbid(unsafe_code)]

/**
 * Precomputed best replies to the opening tile.
 *
 * The opening tile always lands on the same placement, so up to a
 * relabeling of colors the position after it is unique. The table stores,
 * for every (secret color, tile permutation) key in the relabeled frame,
 * the first placement (in enumeration order) the shallow selector would
 * pick. Queries map the secret color and the received tile through the
 * inverse of the relabeling that turns the actual opening tile into
 * (1,2,3,4,5,6), then index by lexicographic permutation rank.
 */
use crate::engine::{
    empty_grid, execute_move, format_placement, generate_placements, parse_placement, Move,
    Placement, Tile, COLORS, INITIAL_PLACEMENT,
};
use crate::policy::evaluate::Analysis;
use crate::policy::first_move_table::{ENTRY_COUNT, PACKED_PLACEMENTS};
use crate::policy::select::{find_best_placements, ScoreMode};

const PERMUTATIONS: usize = 720;

/// Relabels `color` through the permutation mapping `first_tile` to
/// (1,2,3,4,5,6).
fn map_color(first_tile: &Tile, color: u8) -> u8 {
    for (i, &c) in first_tile.iter().enumerate() {
        if c == color {
            return i as u8 + 1;
        }
    }
    unreachable!("color {color} does not occur in the opening tile");
}

/// Lexicographic rank of a permutation of 1..=6, via the factorial number
/// system.
fn permutation_rank(tile: &Tile) -> usize {
    let mut rank = 0;
    for i in 0..COLORS {
        let smaller_right = tile[i + 1..].iter().filter(|&&c| c < tile[i]).count();
        rank = rank * (COLORS - i) + smaller_right;
    }
    rank
}

fn table_lookup(color: u8, tile: &Tile) -> Placement {
    let index = (color as usize - 1) * PERMUTATIONS + permutation_rank(tile);
    debug_assert!(index < ENTRY_COUNT);
    let code = &PACKED_PLACEMENTS[index * 3..index * 3 + 3];
    match parse_placement(code) {
        Some(placement) => placement,
        None => unreachable!("malformed first-move table entry {code:?}"),
    }
}

/// Best placement for the first own move, given the actual opening move
/// and the received tile.
pub fn lookup_first_move(secret_color: u8, first_move: &Move, tile: &Tile) -> Placement {
    debug_assert_eq!(first_move.placement, INITIAL_PLACEMENT);
    let mapped_color = map_color(&first_move.tile, secret_color);
    let mut mapped_tile = *tile;
    for color in mapped_tile.iter_mut() {
        *color = map_color(&first_move.tile, *color);
    }
    table_lookup(mapped_color, &mapped_tile)
}

/// Advances `tile` to the next lexicographic permutation. Returns false
/// (and wraps back to the first permutation) once exhausted.
fn next_permutation(tile: &mut Tile) -> bool {
    let n = tile.len();
    let mut i = n - 1;
    while i > 0 && tile[i - 1] >= tile[i] {
        i -= 1;
    }
    if i == 0 {
        tile.reverse();
        return false;
    }
    let mut j = n - 1;
    while tile[j] <= tile[i - 1] {
        j -= 1;
    }
    tile.swap(i - 1, j);
    tile[i..].reverse();
    true
}

/// Recomputes the whole table by running the shallow selector against the
/// canonical opening grid for every key. Slow; only used by the
/// precompute mode. `progress` receives (done, total) after each key.
pub fn calculate_best_first_moves(
    analysis: &Analysis,
    mut progress: impl FnMut(usize, usize),
) -> Vec<Placement> {
    let mut grid = empty_grid();
    let mut tile: Tile = [1, 2, 3, 4, 5, 6];
    execute_move(&mut grid, &tile, INITIAL_PLACEMENT);
    let all_placements = generate_placements(&grid);

    let total = COLORS * PERMUTATIONS;
    let mut result = Vec::with_capacity(total);
    for color in 1..=COLORS as u8 {
        loop {
            let (best, _score) = find_best_placements(
                analysis,
                color,
                None,
                &grid,
                &tile,
                &all_placements,
                ScoreMode::Shallow,
            );
            result.push(best[0]);
            progress(result.len(), total);
            if !next_permutation(&mut tile) {
                break;
            }
        }
    }
    result
}

/// Renders the table as the source of the committed module.
pub fn format_table_source(placements: &[Placement]) -> String {
    let mut out = String::new();
    out.push_str("// engine/src/policy/first_move_table.rs\n");
    out.push_str("#![forbid(unsafe_code)]\n\n");
    out.push_str("// Generated by `box-player --precompute-first-moves`. Do not edit by hand.\n");
    out.push_str("//\n");
    out.push_str("// One three-character placement code (row letter, column letter,\n");
    out.push_str("// orientation letter) per (secret color, tile permutation) key. Keys are\n");
    out.push_str("// ordered by color 1..6, then by lexicographic rank of the permutation;\n");
    out.push_str("// see `policy::first_move` for the relabeling and indexing scheme.\n\n");
    out.push_str("pub(super) const PACKED_PLACEMENTS: &str = \"");
    for (i, chunk) in placements.chunks(120).enumerate() {
        if i > 0 {
            out.push_str("\\\n     ");
        }
        for &placement in chunk {
            out.push_str(&format_placement(placement));
        }
    }
    out.push_str("\";\n\n");
    out.push_str(&format!(
        "pub(super) const ENTRY_COUNT: usize = {};\n",
        placements.len()
    ));
    out
}
