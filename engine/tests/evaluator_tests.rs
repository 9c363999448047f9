// engine/tests/evaluator_tests.rs
#![forbid(unsafe_code)]

use box_engine::{
    calc_fixed, empty_grid, evaluate_final_score, execute_move, Analysis, Grid, ScoreWeights,
    Tile, DEFAULT_SCORE_WEIGHTS, HEIGHT, INITIAL_PLACEMENT, WIDTH,
};

fn analysis() -> Analysis {
    Analysis::new(DEFAULT_SCORE_WEIGHTS)
}

fn all_fixed() -> Grid {
    [[1u8; WIDTH]; HEIGHT]
}

fn opening_grid() -> Grid {
    let mut grid = empty_grid();
    let tile: Tile = [1, 2, 3, 4, 5, 6];
    execute_move(&mut grid, &tile, INITIAL_PLACEMENT);
    grid
}

#[test]
fn score_weight_strings_round_trip() {
    assert_eq!(DEFAULT_SCORE_WEIGHTS.format(), "250,2500,100,1000,10,100,1,10");
    assert_eq!(
        ScoreWeights::parse("250,2500,100,1000,10,100,1,10"),
        Some(DEFAULT_SCORE_WEIGHTS)
    );
    let custom = ScoreWeights::parse("8,7,6,5,4,3,2,1").expect("eight integers");
    assert_eq!(ScoreWeights::parse(&custom.format()), Some(custom));
}

#[test]
fn score_weight_parsing_rejects_malformed_input() {
    assert_eq!(ScoreWeights::parse(""), None);
    assert_eq!(ScoreWeights::parse("1,2,3"), None);
    assert_eq!(ScoreWeights::parse("1,2,3,4,5,6,7,8,9"), None);
    assert_eq!(ScoreWeights::parse("1,2,3,4,5,6,7,x"), None);
    assert_eq!(ScoreWeights::parse("1,2,3,4,5,6,7,"), None);
}

#[test]
fn full_fixed_unit_square_scores_base_plus_all_fixed_bonuses() {
    let analysis = analysis();
    let mut grid = empty_grid();
    grid[0][0] = 1;
    grid[0][1] = 1;
    grid[1][0] = 1;
    grid[1][1] = 1;
    // base4 + 4*fixed4, times the size multiplier (s + 4).
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &all_fixed(), 1, 0, 0, 1, 1),
        (250 + 2500 * 4) * 5
    );
    // Without fixed corners only the base remains.
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &empty_grid(), 1, 0, 0, 1, 1),
        250 * 5
    );
}

#[test]
fn partial_squares_score_by_corner_pattern() {
    let analysis = analysis();
    let mut grid = empty_grid();
    grid[0][0] = 1;
    grid[0][1] = 1;
    // Two matching corners, nothing fixed.
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &empty_grid(), 1, 0, 0, 1, 1),
        10 * 5
    );
    grid[1][0] = 1;
    // Three matching corners, missing corner free.
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &empty_grid(), 1, 0, 0, 1, 1),
        100 * 5
    );
    // Three matching corners, but the missing corner is fixed: dead.
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &all_fixed(), 1, 0, 0, 1, 1),
        0
    );
    // Squares of another color see nothing here.
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &empty_grid(), 2, 0, 0, 1, 1),
        0
    );
}

#[test]
fn size_multiplier_grows_with_the_square() {
    let analysis = analysis();
    let mut grid = empty_grid();
    for &(r, c) in &[(2, 2), (2, 5), (5, 2), (5, 5)] {
        grid[r][c] = 4;
    }
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &empty_grid(), 4, 2, 2, 5, 5),
        250 * (3 + 4)
    );
}

#[test]
fn two_color_evaluation_is_antisymmetric() {
    let analysis = analysis();
    let grid = opening_grid();
    let fixed = calc_fixed(&grid);
    for my_color in 1..=6u8 {
        for his_color in 1..=6u8 {
            if my_color == his_color {
                continue;
            }
            assert_eq!(
                analysis.evaluate_two_colors(&grid, &fixed, my_color, his_color),
                -analysis.evaluate_two_colors(&grid, &fixed, his_color, my_color)
            );
        }
    }
}

#[test]
fn two_color_evaluation_matches_per_color_scores_on_the_opening() {
    let analysis = analysis();
    let grid = opening_grid();
    let fixed = calc_fixed(&grid);
    let scores = analysis.evaluate_all_colors(&grid, &fixed);
    for my_color in 1..=6u8 {
        for his_color in 1..=6u8 {
            if my_color == his_color {
                continue;
            }
            assert_eq!(
                analysis.evaluate_two_colors(&grid, &fixed, my_color, his_color),
                scores[my_color as usize - 1] - scores[his_color as usize - 1]
            );
        }
    }
}

#[test]
fn final_score_counts_completed_squares_by_side_length() {
    assert_eq!(evaluate_final_score(&empty_grid()), [0; 6]);
    // The opening tile never repeats a color within a row pair, so it
    // completes nothing either.
    assert_eq!(evaluate_final_score(&opening_grid()), [0; 6]);

    let mut grid = empty_grid();
    grid[3][3] = 3;
    grid[3][4] = 3;
    grid[4][3] = 3;
    grid[4][4] = 3;
    assert_eq!(evaluate_final_score(&grid)[2], 1);

    let mut grid = empty_grid();
    for &(r, c) in &[(0, 0), (0, 2), (2, 0), (2, 2)] {
        grid[r][c] = 4;
    }
    assert_eq!(evaluate_final_score(&grid)[3], 2);
}

#[test]
fn custom_weights_flow_through_the_memo() {
    let weights = ScoreWeights::parse("1000,0,0,0,0,0,0,0").expect("eight integers");
    let analysis = Analysis::new(weights);
    let mut grid = empty_grid();
    for &(r, c) in &[(0, 0), (0, 1), (1, 0), (1, 1)] {
        grid[r][c] = 2;
    }
    // Only full squares score, and fixed corners add nothing.
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &all_fixed(), 2, 0, 0, 1, 1),
        1000 * 5
    );
    grid[1][1] = 0;
    assert_eq!(
        analysis.evaluate_rectangle(&grid, &empty_grid(), 2, 0, 0, 1, 1),
        0
    );
}
