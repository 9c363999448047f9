// engine/src/policy/search.rs
#![forbid(unsafe_code)]

/**
 * Tile-averaged lookahead.
 *
 * During the reply ply, the opponent draws a random tile and then picks a
 * placement. The tile is uniform, so the position is assessed as the sum
 * over the relevant tiles of the minimum over all legal opponent
 * placements (the opponent wants our two-color score low):
 *
 * ```text
 *                  state                 |
 *                /   |   \               |
 *              /    sum    \             |
 *            /       |        \          |
 *       tile1      tile2       tile3     |
 *        /|\        /|\         /|\      |
 *       /min\      /min\       /min\     |
 *      /  |  \    /  |  \     /  |  \    |
 *     place1..N  place1..N   place1..N   |
 * ```
 *
 * The placement list is shared by all tiles, and for a given placement
 * most of the evaluation does not depend on which tile was drawn: only
 * squares overlapping the fresh footprint do. [`evaluate_second_ply`]
 * exploits both facts; [`evaluate_second_ply_naive`] is the direct
 * rendition kept as the differential-test reference.
 */
use crate::engine::{
    calc_fixed, execute_move, generate_placements, Grid, Placement, Tile, COLORS, HEIGHT, WIDTH,
};
use crate::policy::evaluate::Analysis;

/// Tiles whose outcomes can differ for a fixed (my, his) pair: one per
/// ordered position pair of the two colors.
pub const RELEVANT_TILE_COUNT: usize = COLORS * (COLORS - 1);

/// Stand-in color marking the footprint before the tile is known.
const PLACEHOLDER_COLOR: u8 = COLORS as u8 + 1;

/// Generates the tiles that differ only in the positions of the two given
/// colors, with the remaining colors filling the other slots in ascending
/// order.
pub fn generate_relevant_tiles(my_color: u8, his_color: u8) -> [Tile; RELEVANT_TILE_COUNT] {
    debug_assert!(
        (1..=COLORS as u8).contains(&my_color)
            && (1..=COLORS as u8).contains(&his_color)
            && my_color != his_color
    );
    let mut tiles = [[0u8; COLORS]; RELEVANT_TILE_COUNT];
    let mut pos = 0;
    for i in 0..COLORS {
        for j in 0..COLORS {
            if i == j {
                continue;
            }
            let mut next_color = 1u8;
            while next_color == my_color || next_color == his_color {
                next_color += 1;
            }
            let tile = &mut tiles[pos];
            pos += 1;
            for (k, slot) in tile.iter_mut().enumerate() {
                if k == i {
                    *slot = my_color;
                } else if k == j {
                    *slot = his_color;
                } else {
                    *slot = next_color;
                    next_color += 1;
                    while next_color == my_color || next_color == his_color {
                        next_color += 1;
                    }
                }
            }
        }
    }
    debug_assert_eq!(pos, RELEVANT_TILE_COUNT);
    tiles
}

fn all_fixed() -> Grid {
    [[1u8; WIDTH]; HEIGHT]
}

/// Direct implementation of the tile-averaged reply ply. Slow; retained as
/// the reference for [`evaluate_second_ply`].
pub fn evaluate_second_ply_naive(
    analysis: &Analysis,
    my_color: u8,
    his_color: u8,
    grid: &Grid,
) -> i64 {
    let placements = generate_placements(grid);
    if placements.is_empty() {
        // No more moves: every cell is final.
        return RELEVANT_TILE_COUNT as i64
            * analysis.evaluate_two_colors(grid, &all_fixed(), my_color, his_color);
    }

    let tiles = generate_relevant_tiles(my_color, his_color);
    let mut total_score = 0;
    for tile in &tiles {
        let mut best_score = i64::MAX;
        for &placement in &placements {
            let mut copy = *grid;
            execute_move(&mut copy, tile, placement);
            let fixed = calc_fixed(&copy);
            let score = analysis.evaluate_two_colors(&copy, &fixed, my_color, his_color);
            best_score = best_score.min(score);
        }
        total_score += best_score;
    }
    total_score
}

#[derive(Clone, Copy)]
struct Square {
    r1: u8,
    c1: u8,
    r2: u8,
    c2: u8,
}

struct PlacementData {
    placement: Placement,
    fixed: Grid,
    base_score: i64,
    undecided_my: Vec<Square>,
    undecided_his: Vec<Square>,
}

/// True iff the square might still score for `color` once the placeholder
/// cells resolve: some corner already holds the color, and no corner is
/// fixed to a different color.
fn square_undecided_for(
    grid: &Grid,
    fixed: &Grid,
    color: u8,
    corners: [(usize, usize); 4],
) -> bool {
    corners.iter().any(|&(r, c)| grid[r][c] == color)
        && corners.iter().all(|&(r, c)| {
            fixed[r][c] == 0 || grid[r][c] == color || grid[r][c] == PLACEHOLDER_COLOR
        })
}

/// Tile-averaged reply-ply evaluation with per-placement precomputation.
///
/// For each opponent placement, a scratch grid is filled with a
/// placeholder color, and everything independent of the eventual tile is
/// scored once: single-cell terms outside the footprint and squares whose
/// corners avoid it. Squares that touch the footprint are kept in
/// per-color "undecided" lists and re-scored per tile. The fixed map only
/// depends on occupancy, so the placeholder map is valid for every tile.
pub fn evaluate_second_ply(analysis: &Analysis, my_color: u8, his_color: u8, grid: &Grid) -> i64 {
    let placements = generate_placements(grid);
    if placements.is_empty() {
        // No more moves: every cell is final.
        return RELEVANT_TILE_COUNT as i64
            * analysis.evaluate_two_colors(grid, &all_fixed(), my_color, his_color);
    }

    let placeholder_tile: Tile = [PLACEHOLDER_COLOR; COLORS];
    let mut data = Vec::with_capacity(placements.len());
    for &placement in &placements {
        let mut copy = *grid;
        execute_move(&mut copy, &placeholder_tile, placement);
        let fixed = calc_fixed(&copy);

        let mut base_score = 0i64;
        let mut undecided_my = Vec::new();
        let mut undecided_his = Vec::new();
        for r1 in 0..HEIGHT {
            for c1 in 0..WIDTH {
                if copy[r1][c1] == my_color {
                    base_score += analysis.cell_points(&fixed, r1, c1);
                } else if copy[r1][c1] == his_color {
                    base_score -= analysis.cell_points(&fixed, r1, c1);
                }
                let (mut r2, mut c2) = (r1 + 1, c1 + 1);
                while r2 < HEIGHT && c2 < WIDTH {
                    let corners = [(r1, c1), (r1, c2), (r2, c1), (r2, c2)];
                    if corners
                        .iter()
                        .any(|&(r, c)| copy[r][c] == PLACEHOLDER_COLOR)
                    {
                        let square = Square {
                            r1: r1 as u8,
                            c1: c1 as u8,
                            r2: r2 as u8,
                            c2: c2 as u8,
                        };
                        if copy[r1][c1] == PLACEHOLDER_COLOR && copy[r2][c2] == PLACEHOLDER_COLOR {
                            // The square covers the footprint diagonally, so
                            // it could become a full square of whichever
                            // color lands on both diagonal cells.
                            undecided_my.push(square);
                            undecided_his.push(square);
                        } else {
                            if square_undecided_for(&copy, &fixed, my_color, corners) {
                                undecided_my.push(square);
                            }
                            if square_undecided_for(&copy, &fixed, his_color, corners) {
                                undecided_his.push(square);
                            }
                        }
                    } else {
                        // No placeholder corner: the value is tile-independent.
                        base_score +=
                            analysis.evaluate_rectangle(&copy, &fixed, my_color, r1, c1, r2, c2);
                        base_score -=
                            analysis.evaluate_rectangle(&copy, &fixed, his_color, r1, c1, r2, c2);
                    }
                    r2 += 1;
                    c2 += 1;
                }
            }
        }
        data.push(PlacementData {
            placement,
            fixed,
            base_score,
            undecided_my,
            undecided_his,
        });
    }

    let tiles = generate_relevant_tiles(my_color, his_color);
    let mut total_score = 0;
    for tile in &tiles {
        let mut best_score = i64::MAX;
        for extra in &data {
            let mut copy = *grid;
            execute_move(&mut copy, tile, extra.placement);
            let mut score = extra.base_score;
            // Single-cell terms for the freshly written footprint.
            let (rows, cols) = extra.placement.ori.extent();
            let r0 = extra.placement.row as usize;
            let c0 = extra.placement.col as usize;
            for r in r0..r0 + rows {
                for c in c0..c0 + cols {
                    if copy[r][c] == my_color {
                        score += analysis.cell_points(&extra.fixed, r, c);
                    } else if copy[r][c] == his_color {
                        score -= analysis.cell_points(&extra.fixed, r, c);
                    }
                }
            }
            for square in &extra.undecided_my {
                score += analysis.evaluate_rectangle(
                    &copy,
                    &extra.fixed,
                    my_color,
                    square.r1 as usize,
                    square.c1 as usize,
                    square.r2 as usize,
                    square.c2 as usize,
                );
            }
            for square in &extra.undecided_his {
                score -= analysis.evaluate_rectangle(
                    &copy,
                    &extra.fixed,
                    his_color,
                    square.r1 as usize,
                    square.c1 as usize,
                    square.r2 as usize,
                    square.c2 as usize,
                );
            }
            best_score = best_score.min(score);
        }
        total_score += best_score;
    }
    total_score
}

/// One ply beyond [`evaluate_second_ply`]: for each tile the opponent may
/// draw next, they pick the placement maximizing their own reply-ply
/// value, which is the minimum of its negation for us.
pub fn evaluate_extra_ply(analysis: &Analysis, my_color: u8, his_color: u8, grid: &Grid) -> i64 {
    let placements = generate_placements(grid);
    if placements.is_empty() {
        return -(RELEVANT_TILE_COUNT as i64)
            * evaluate_second_ply(analysis, his_color, my_color, grid);
    }

    let tiles = generate_relevant_tiles(my_color, his_color);
    let mut total_score = 0;
    for tile in &tiles {
        let mut best_score = i64::MAX;
        for &placement in &placements {
            let mut copy = *grid;
            execute_move(&mut copy, tile, placement);
            let score = -evaluate_second_ply(analysis, his_color, my_color, &copy);
            best_score = best_score.min(score);
        }
        total_score += best_score;
    }
    total_score
}

/// Rough cost of [`evaluate_extra_ply`] in milliseconds, used to decide
/// whether the extra ply fits in the remaining time budget.
pub fn extra_ply_cost_estimate_ms(placement_count: usize) -> u64 {
    (placement_count as u64).pow(4) / 50
}
