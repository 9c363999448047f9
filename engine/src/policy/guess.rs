// engine/src/policy/guess.rs
#![forbid(unsafe_code)]

use crate::engine::COLORS;

/// Infers the opponent's secret color from how the position changes on
/// their turns: whatever color they keep strengthening is probably theirs.
#[derive(Clone, Debug, Default)]
pub struct SecretColorGuesser {
    diff: [i64; COLORS],
}

impl SecretColorGuesser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates the per-color score delta across one opponent move.
    pub fn update(&mut self, prev_scores: &[i64; COLORS], next_scores: &[i64; COLORS]) {
        for c in 0..COLORS {
            self.diff[c] += next_scores[c] - prev_scores[c];
        }
    }

    /// Current best guess: the color with the largest cumulative delta,
    /// excluding the guesser's own. Ties go to the smallest color.
    pub fn color(&self, my_color: u8) -> u8 {
        let mut best_color = 0;
        let mut max_diff = i64::MIN;
        for i in 0..COLORS {
            if self.diff[i] > max_diff && (i + 1) as u8 != my_color {
                best_color = (i + 1) as u8;
                max_diff = self.diff[i];
            }
        }
        best_color
    }
}
