// engine/tests/selector_tests.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use box_engine::{
    calc_fixed, empty_grid, execute_move, find_best_placements, generate_placements,
    random_sample, Analysis, ScoreMode, SecretColorGuesser, Tile, COLORS, DEFAULT_SCORE_WEIGHTS,
    INITIAL_PLACEMENT,
};

fn analysis() -> Analysis {
    Analysis::new(DEFAULT_SCORE_WEIGHTS)
}

#[test]
fn guesser_follows_the_accumulated_deltas() {
    let mut guesser = SecretColorGuesser::new();
    let zero = [0i64; COLORS];
    guesser.update(&zero, &[0, 5, 0, 2, 0, 0]);
    guesser.update(&zero, &[0, 3, 0, 1, 0, 0]);
    guesser.update(&zero, &[0, 0, 0, 7, 0, 0]);
    // Cumulative deltas: (0, 8, 0, 10, 0, 0); color 4 leads.
    assert_eq!(guesser.color(2), 4);
    // If color 4 were our own, color 2 would be the best remaining guess.
    assert_eq!(guesser.color(4), 2);
}

#[test]
fn guesser_breaks_ties_toward_the_smallest_color() {
    let guesser = SecretColorGuesser::new();
    assert_eq!(guesser.color(1), 2);
    assert_eq!(guesser.color(2), 1);
}

#[test]
fn guesser_never_returns_the_own_color() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let mut guesser = SecretColorGuesser::new();
        let mut next = [0i64; COLORS];
        for v in next.iter_mut() {
            *v = rng.gen_range(-50..50);
        }
        guesser.update(&[0; COLORS], &next);
        for my_color in 1..=COLORS as u8 {
            let guessed = guesser.color(my_color);
            assert_ne!(guessed, my_color);
            assert!((1..=COLORS as u8).contains(&guessed));
        }
    }
}

#[test]
fn selector_returns_exactly_the_argmax_set() {
    let analysis = analysis();
    let mut grid = empty_grid();
    execute_move(&mut grid, &[2, 4, 6, 1, 3, 5], INITIAL_PLACEMENT);
    let tile: Tile = [5, 3, 1, 6, 4, 2];
    let all_placements = generate_placements(&grid);

    let (best, best_score) = find_best_placements(
        &analysis,
        2,
        Some(5),
        &grid,
        &tile,
        &all_placements,
        ScoreMode::Shallow,
    );
    assert!(!best.is_empty());

    // Recompute every candidate's score independently; the returned set
    // must hold exactly the maximal ones, in enumeration order.
    let mut expected = Vec::new();
    let mut max_score = i64::MIN;
    for &placement in &all_placements {
        let mut copy = grid;
        execute_move(&mut copy, &tile, placement);
        let fixed = calc_fixed(&copy);
        let score = analysis.evaluate_two_colors(&copy, &fixed, 2, 5);
        if score > max_score {
            expected.clear();
            max_score = score;
        }
        if score == max_score {
            expected.push(placement);
        }
    }
    assert_eq!(best_score, max_score);
    assert_eq!(best, expected);
}

#[test]
fn shallow_unknown_opponent_uses_the_strongest_rival() {
    // With a known opponent the score is a plain difference; with an
    // unknown one it subtracts the best rival instead. On a position where
    // one rival dominates, both agree.
    let analysis = analysis();
    let mut grid = empty_grid();
    execute_move(&mut grid, &[1, 2, 3, 4, 5, 6], INITIAL_PLACEMENT);
    let tile: Tile = [6, 5, 4, 3, 2, 1];
    let all_placements = generate_placements(&grid);

    let (_, score_unknown) = find_best_placements(
        &analysis,
        3,
        None,
        &grid,
        &tile,
        &all_placements,
        ScoreMode::Shallow,
    );
    // The unknown-opponent score can never beat any known-opponent score.
    for rival in 1..=COLORS as u8 {
        if rival == 3 {
            continue;
        }
        let (_, score_known) = find_best_placements(
            &analysis,
            3,
            Some(rival),
            &grid,
            &tile,
            &all_placements,
            ScoreMode::Shallow,
        );
        assert!(score_unknown <= score_known);
    }
}

#[test]
fn sampling_picks_a_member_uniformly_at_random() {
    let placements = generate_placements(&{
        let mut grid = empty_grid();
        execute_move(&mut grid, &[1, 2, 3, 4, 5, 6], INITIAL_PLACEMENT);
        grid
    });
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let choice = random_sample(&placements, &mut rng);
        assert!(placements.contains(&choice));
    }
    let single = [placements[0]];
    assert_eq!(random_sample(&single, &mut rng), placements[0]);
}
