// engine/src/policy/select.rs
#![forbid(unsafe_code)]

use rand::Rng;

use crate::engine::{calc_fixed, execute_move, Grid, Placement, Tile, COLORS};
use crate::policy::evaluate::Analysis;
use crate::policy::search::{evaluate_extra_ply, evaluate_second_ply};

/// How deep to look when scoring a candidate placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreMode {
    /// Static evaluation of the resulting grid.
    Shallow,
    /// Tile-averaged opponent reply ply.
    Deep,
    /// Reply ply plus one more own ply; requires a known opponent color.
    ExtraPly,
}

fn score_position(
    analysis: &Analysis,
    my_color: u8,
    his_color: Option<u8>,
    grid: &Grid,
    mode: ScoreMode,
) -> i64 {
    match (mode, his_color) {
        (ScoreMode::Shallow, Some(his)) => {
            analysis.evaluate_two_colors(grid, &calc_fixed(grid), my_color, his)
        }
        (ScoreMode::Shallow, None) => {
            let fixed = calc_fixed(grid);
            let scores = analysis.evaluate_all_colors(grid, &fixed);
            let mut max_other = 0;
            for color in 1..=COLORS as u8 {
                if color != my_color && scores[color as usize - 1] > max_other {
                    max_other = scores[color as usize - 1];
                }
            }
            scores[my_color as usize - 1] - max_other
        }
        (ScoreMode::Deep, Some(his)) => evaluate_second_ply(analysis, my_color, his, grid),
        (ScoreMode::Deep, None) => {
            // Unknown opponent: assume the worst of the five candidates.
            let mut score = i64::MAX;
            for color in 1..=COLORS as u8 {
                if color != my_color {
                    score = score.min(evaluate_second_ply(analysis, my_color, color, grid));
                }
            }
            score
        }
        (ScoreMode::ExtraPly, Some(his)) => evaluate_extra_ply(analysis, my_color, his, grid),
        (ScoreMode::ExtraPly, None) => {
            unreachable!("extra-ply search requires a known opponent color")
        }
    }
}

/// Scores every candidate placement on a scratch grid and returns the ones
/// tied for the maximum, in enumeration order, together with that score.
pub fn find_best_placements(
    analysis: &Analysis,
    my_color: u8,
    his_color: Option<u8>,
    grid: &Grid,
    tile: &Tile,
    all_placements: &[Placement],
    mode: ScoreMode,
) -> (Vec<Placement>, i64) {
    let mut best_score = i64::MIN;
    let mut best_placements = Vec::new();
    for &placement in all_placements {
        let mut copy = *grid;
        execute_move(&mut copy, tile, placement);
        let score = score_position(analysis, my_color, his_color, &copy, mode);
        if score > best_score {
            best_placements.clear();
            best_score = score;
        }
        if score == best_score {
            best_placements.push(placement);
        }
    }
    (best_placements, best_score)
}

/// Uniform choice among tied placements.
pub fn random_sample<R: Rng>(placements: &[Placement], rng: &mut R) -> Placement {
    assert!(
        !placements.is_empty(),
        "cannot sample from an empty placement list"
    );
    placements[rng.gen_range(0..placements.len())]
}
