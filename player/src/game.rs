// player/src/game.rs
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::process::exit;

use rand::rngs::StdRng;

use box_engine::{
    calc_fixed, empty_grid, execute_move, extra_ply_cost_estimate_ms, find_best_placements,
    format_placement, generate_placements, is_game_over, is_valid, lookup_first_move, parse_color,
    parse_move, parse_tile, random_sample, Analysis, Move, ScoreMode, SecretColorGuesser, Tile,
    COLORS, INITIAL_PLACEMENT,
};

use crate::logging;
use crate::timer::Timer;

pub struct GameOptions {
    pub deep: bool,
    pub guess: bool,
    pub first_move_table: bool,
    pub extra_ply: u32,
    pub time_limit: u64,
}

fn read_input_line() -> String {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => {
            log::error!("Unexpected end of input!");
            exit(1);
        }
        Ok(_) => {}
        Err(err) => {
            log::error!("Failed to read input: {err}");
            exit(1);
        }
    }
    let line = line.trim_end_matches(['\r', '\n']).to_string();
    logging::log_received(&line);
    if line == "Quit" {
        log::info!("Exiting.");
        exit(0);
    }
    line
}

fn read_secret_color() -> u8 {
    let s = read_input_line();
    let mut chars = s.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if let Some(color) = parse_color(ch) {
            return color;
        }
    }
    log::error!("Could not parse secret color: {s}");
    exit(1);
}

fn read_tile() -> Tile {
    let s = read_input_line();
    match parse_tile(&s) {
        Some(tile) => tile,
        None => {
            log::error!("Could not parse tile: {s}");
            exit(1);
        }
    }
}

fn read_move() -> Move {
    let s = read_input_line();
    match parse_move(&s) {
        Some(mv) => mv,
        None => {
            log::error!("Could not parse move: {s}");
            exit(1);
        }
    }
}

fn write_output_line(s: &str) {
    let mut stdout = io::stdout();
    if writeln!(stdout, "{s}").and_then(|_| stdout.flush()).is_err() {
        log::error!("Failed to write output!");
        exit(1);
    }
}

/// Picks the search depth for this turn. The extra ply only runs below the
/// configured placement-count threshold, and only when its estimated cost
/// fits in what is left of the time budget.
fn choose_mode(
    opts: &GameOptions,
    his_secret_color: Option<u8>,
    placement_count: usize,
    timer: &Timer,
) -> ScoreMode {
    if !opts.deep {
        return ScoreMode::Shallow;
    }
    if opts.extra_ply > 0 && his_secret_color.is_some() {
        if (placement_count as u32) < opts.extra_ply {
            if opts.time_limit == 0 {
                logging::log_extra_ply(placement_count, true, None);
                return ScoreMode::ExtraPly;
            }
            let needed_ms = extra_ply_cost_estimate_ms(placement_count);
            let left_ms = (opts.time_limit * 1000)
                .saturating_sub(timer.elapsed_running().as_millis() as u64);
            let enabled = needed_ms <= left_ms;
            logging::log_extra_ply(placement_count, enabled, Some((needed_ms, left_ms)));
            if enabled {
                return ScoreMode::ExtraPly;
            }
        } else {
            logging::log_extra_ply(placement_count, false, None);
        }
    }
    ScoreMode::Deep
}

pub fn play_game(analysis: &Analysis, opts: &GameOptions, mut rng: StdRng) {
    let mut timer = Timer::new(false);

    // First line of input contains my secret color.
    let my_secret_color = read_secret_color();

    // Second line of input contains the first tile placed in the center.
    let start_move = read_move();
    assert_eq!(
        start_move.placement, INITIAL_PLACEMENT,
        "opening move must use the fixed initial placement"
    );
    let mut grid = empty_grid();
    execute_move(&mut grid, &start_move.tile, start_move.placement);

    // Third line of input contains either "Start" if I play first, or else
    // the first move played by the opponent.
    let first_input = read_input_line();
    let my_player = if first_input == "Start" { 0 } else { 1 };

    let mut guesser = SecretColorGuesser::new();
    let mut last_scores = [0i64; COLORS];
    let mut his_secret_color: Option<u8> = None;

    let mut turn = 0usize;
    while !is_game_over(&grid) {
        if opts.guess {
            let fixed = calc_fixed(&grid);
            let scores = analysis.evaluate_all_colors(&grid, &fixed);
            if turn > 0 && turn % 2 == my_player {
                guesser.update(&last_scores, &scores);
                let guessed = guesser.color(my_secret_color);
                his_secret_color = Some(guessed);
                logging::log_guess(guessed);
            }
            last_scores = scores;
        }

        if turn % 2 == my_player {
            // My turn! Read input.
            let tile = read_tile();
            let pause_duration = timer.resume();
            logging::log_pause(pause_duration, timer.elapsed_paused());

            // Calculate my move.
            let placement = if turn == 0 && opts.first_move_table {
                lookup_first_move(my_secret_color, &start_move, &tile)
            } else {
                let all_placements = generate_placements(&grid);
                let mode = choose_mode(opts, his_secret_color, all_placements.len(), &timer);
                let (best_placements, best_score) = find_best_placements(
                    analysis,
                    my_secret_color,
                    his_secret_color,
                    &grid,
                    &tile,
                    &all_placements,
                    mode,
                );
                logging::log_move_count(all_placements.len(), best_placements.len(), best_score);
                random_sample(&best_placements, &mut rng)
            };
            assert!(is_valid(&grid, placement));
            execute_move(&mut grid, &tile, placement);

            // Write output. Pause the timer just before sending, since the
            // referee may suspend our process immediately after.
            let output = format_placement(placement);
            logging::log_sending(&output);
            let turn_duration = timer.pause();
            logging::log_time(turn_duration, timer.elapsed_running());
            write_output_line(&output);
        } else {
            // Opponent's turn.
            let line = if turn == 0 {
                first_input.clone()
            } else {
                read_input_line()
            };
            match parse_move(&line) {
                None => {
                    log::error!("Could not parse opponent's move: {line}");
                    exit(1);
                }
                Some(mv) => {
                    if !is_valid(&grid, mv.placement) {
                        log::error!("Opponent's move is invalid: {line}");
                        exit(1);
                    }
                    execute_move(&mut grid, &mv.tile, mv.placement);
                }
            }
        }
        turn += 1;
    }
    log::info!("Game over.");
}
