// engine/tests/board_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests over generated games.
 *
 * Purpose:
 * - Provide fuzz-like coverage using generated seeds and rollout lengths.
 * - Lock board-model invariants that must hold regardless of policy logic.
 *
 * Invariants covered:
 * - Executing a legal placement only changes cells inside its footprint,
 *   and the footprint matches the documented write pattern.
 * - Colored cells stay in 1..=6.
 * - Once the game is over, no legal placement remains and the game stays
 *   over after any hypothetical write.
 * - The fixed map marks exactly the cells no claimable window covers.
 * - The two-color evaluation equals the difference of the per-color
 *   scores.
 */
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

use box_engine::{
    calc_fixed, empty_grid, execute_move, generate_placements, is_game_over, Analysis, Grid,
    Orientation, Placement, Tile, COLORS, DEFAULT_SCORE_WEIGHTS, HEIGHT, INITIAL_PLACEMENT, WIDTH,
};

fn random_tile(rng: &mut StdRng) -> Tile {
    let mut tile: Tile = [1, 2, 3, 4, 5, 6];
    tile.shuffle(rng);
    tile
}

fn footprint_cells(placement: Placement) -> Vec<(usize, usize)> {
    let (rows, cols) = placement.ori.extent();
    let r = placement.row as usize;
    let c = placement.col as usize;
    let mut cells = Vec::with_capacity(rows * cols);
    for dr in 0..rows {
        for dc in 0..cols {
            cells.push((r + dr, c + dc));
        }
    }
    cells
}

/// Brute-force check of the fixed map against its definition: a cell is
/// fixed iff every window covering it holds at least 5 colored cells.
fn check_fixed_map(grid: &Grid) {
    let fixed = calc_fixed(grid);
    let mut claimable = [[false; WIDTH]; HEIGHT];
    for r in 0..=HEIGHT - 2 {
        for c in 0..=WIDTH - COLORS {
            let mut count = 0;
            for i in 0..COLORS {
                count += (grid[r][c + i] != 0) as u32 + (grid[r + 1][c + i] != 0) as u32;
            }
            if count <= 4 {
                for i in 0..COLORS {
                    claimable[r][c + i] = true;
                    claimable[r + 1][c + i] = true;
                }
            }
        }
    }
    for r in 0..=HEIGHT - COLORS {
        for c in 0..=WIDTH - 2 {
            let mut count = 0;
            for i in 0..COLORS {
                count += (grid[r + i][c] != 0) as u32 + (grid[r + i][c + 1] != 0) as u32;
            }
            if count <= 4 {
                for i in 0..COLORS {
                    claimable[r + i][c] = true;
                    claimable[r + i][c + 1] = true;
                }
            }
        }
    }
    for r in 0..HEIGHT {
        for c in 0..WIDTH {
            assert_eq!(
                fixed[r][c] == 0,
                claimable[r][c],
                "fixed map disagrees at ({r},{c})"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn generated_games_respect_board_invariants(
        seed in any::<u64>(),
        steps in 1usize..60,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = empty_grid();
        execute_move(&mut grid, &random_tile(&mut rng), INITIAL_PLACEMENT);

        for _ in 0..steps {
            let placements = generate_placements(&grid);
            if placements.is_empty() {
                break;
            }
            prop_assert!(!is_game_over(&grid));

            let placement = placements[rng.gen_range(0..placements.len())];
            let tile = random_tile(&mut rng);
            let before = grid;
            execute_move(&mut grid, &tile, placement);

            let footprint = footprint_cells(placement);
            for r in 0..HEIGHT {
                for c in 0..WIDTH {
                    if footprint.contains(&(r, c)) {
                        prop_assert!((1..=COLORS as u8).contains(&grid[r][c]));
                    } else {
                        prop_assert_eq!(grid[r][c], before[r][c]);
                    }
                }
            }

            // The written pattern itself.
            let r = placement.row as usize;
            let c = placement.col as usize;
            match placement.ori {
                Orientation::Horizontal => {
                    for i in 0..COLORS {
                        prop_assert_eq!(grid[r][c + i], tile[i]);
                        prop_assert_eq!(grid[r + 1][c + COLORS - 1 - i], tile[i]);
                    }
                }
                Orientation::Vertical => {
                    for i in 0..COLORS {
                        prop_assert_eq!(grid[r + COLORS - 1 - i][c], tile[i]);
                        prop_assert_eq!(grid[r + i][c + 1], tile[i]);
                    }
                }
            }
        }

        check_fixed_map(&grid);

        if is_game_over(&grid) {
            prop_assert!(generate_placements(&grid).is_empty());
        }
    }

    #[test]
    fn two_color_evaluation_matches_per_color_scores(
        seed in any::<u64>(),
        steps in 0usize..20,
    ) {
        let analysis = Analysis::new(DEFAULT_SCORE_WEIGHTS);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = empty_grid();
        execute_move(&mut grid, &random_tile(&mut rng), INITIAL_PLACEMENT);
        for _ in 0..steps {
            let placements = generate_placements(&grid);
            if placements.is_empty() {
                break;
            }
            let placement = placements[rng.gen_range(0..placements.len())];
            let tile = random_tile(&mut rng);
            execute_move(&mut grid, &tile, placement);
        }

        let fixed = calc_fixed(&grid);
        let scores = analysis.evaluate_all_colors(&grid, &fixed);
        for my_color in 1..=COLORS as u8 {
            for his_color in 1..=COLORS as u8 {
                if my_color == his_color {
                    continue;
                }
                let diff = analysis.evaluate_two_colors(&grid, &fixed, my_color, his_color);
                prop_assert_eq!(
                    diff,
                    scores[my_color as usize - 1] - scores[his_color as usize - 1]
                );
            }
        }
    }
}
