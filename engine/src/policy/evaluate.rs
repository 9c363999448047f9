// engine/src/policy/evaluate.rs
#![forbid(unsafe_code)]

/**
 * Square-based positional evaluation.
 *
 * A "square" is axis-aligned with four same-colored corners at
 * (r1,c1),(r1,c2),(r2,c1),(r2,c2), r2-r1 == c2-c1. The positional value of
 * a square depends on how many corners already hold the color, how many
 * corners are fixed (no legal placement can overwrite them), and the side
 * length. Since the corner/fixed pattern has only 256 combinations, the
 * base value is memoized once per weight set.
 */
use crate::engine::{Grid, COLORS, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreWeights {
    pub base4: i64,
    pub fixed4: i64,
    pub base3: i64,
    pub fixed3: i64,
    pub base2: i64,
    pub fixed2: i64,
    pub base1: i64,
    pub fixed1: i64,
}

pub const DEFAULT_SCORE_WEIGHTS: ScoreWeights = ScoreWeights {
    base4: 250,
    fixed4: 2500,
    base3: 100,
    fixed3: 1000,
    base2: 10,
    fixed2: 100,
    base1: 1,
    fixed1: 10,
};

impl ScoreWeights {
    /// Parses the `base4,fixed4,base3,fixed3,base2,fixed2,base1,fixed1`
    /// option value: exactly 8 comma-separated integers.
    pub fn parse(s: &str) -> Option<ScoreWeights> {
        let mut values = [0i64; 8];
        let mut count = 0;
        for part in s.split(',') {
            if count == 8 {
                return None;
            }
            values[count] = part.parse().ok()?;
            count += 1;
        }
        if count != 8 {
            return None;
        }
        Some(ScoreWeights {
            base4: values[0],
            fixed4: values[1],
            base3: values[2],
            fixed3: values[3],
            base2: values[4],
            fixed2: values[5],
            base1: values[6],
            fixed1: values[7],
        })
    }

    pub fn format(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{}",
            self.base4,
            self.fixed4,
            self.base3,
            self.fixed3,
            self.base2,
            self.fixed2,
            self.base1,
            self.fixed1
        )
    }
}

/// Immutable evaluation context: the configured weights plus the 256-entry
/// square-base memo derived from them. Built once after option parsing and
/// threaded through evaluation and search.
pub struct Analysis {
    weights: ScoreWeights,
    square_base: [i64; 256],
}

impl Analysis {
    pub fn new(weights: ScoreWeights) -> Self {
        let mut square_base = [0i64; 256];
        for (index, entry) in square_base.iter_mut().enumerate() {
            let a = index & 0x80 != 0;
            let b = index & 0x40 != 0;
            let c = index & 0x20 != 0;
            let d = index & 0x10 != 0;
            let fa = index & 0x08 != 0;
            let fb = index & 0x04 != 0;
            let fc = index & 0x02 != 0;
            let fd = index & 0x01 != 0;
            let num_fixed = (fa as i64) + (fb as i64) + (fc as i64) + (fd as i64);
            *entry = if a && b && c && d {
                // Square!
                weights.base4 + weights.fixed4 * num_fixed
            } else if (a && b && c && !fd)
                || (a && b && d && !fc)
                || (a && c && d && !fb)
                || (b && c && d && !fa)
            {
                // One cell short of a square.
                weights.base3 + weights.fixed3 * num_fixed
            } else if (a && b && !fc && !fd)
                || (a && c && !fb && !fd)
                || (a && d && !fb && !fc)
                || (b && c && !fa && !fd)
                || (b && d && !fa && !fc)
                || (c && d && !fa && !fb)
            {
                // Two corners aligned horizontally, vertically, or diagonally.
                weights.base2 + weights.fixed2 * num_fixed
            } else {
                0
            };
        }
        Self {
            weights,
            square_base,
        }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Contribution of a single colored cell.
    #[inline]
    pub(crate) fn cell_points(&self, fixed: &Grid, r: usize, c: usize) -> i64 {
        if fixed[r][c] != 0 {
            self.weights.fixed1
        } else {
            self.weights.base1
        }
    }

    /// Value of the square with corners (r1,c1) and (r2,c2) for `color`.
    ///
    /// The size multiplier stays out of the memo so the table remains
    /// size-independent.
    pub fn evaluate_rectangle(
        &self,
        grid: &Grid,
        fixed: &Grid,
        color: u8,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
    ) -> i64 {
        //  a  b
        //  c  d
        let mut index = 0usize;
        index |= ((grid[r1][c1] == color) as usize) << 7;
        index |= ((grid[r1][c2] == color) as usize) << 6;
        index |= ((grid[r2][c1] == color) as usize) << 5;
        index |= ((grid[r2][c2] == color) as usize) << 4;
        index |= ((fixed[r1][c1] != 0) as usize) << 3;
        index |= ((fixed[r1][c2] != 0) as usize) << 2;
        index |= ((fixed[r2][c1] != 0) as usize) << 1;
        index |= (fixed[r2][c2] != 0) as usize;
        // +4 determined empirically, though the effect is small
        self.square_base[index] * ((r2 - r1) as i64 + 4)
    }

    /// Positional score of every color: single-cell terms plus all squares,
    /// each visited from its top-left corner.
    pub fn evaluate_all_colors(&self, grid: &Grid, fixed: &Grid) -> [i64; COLORS] {
        let mut scores = [0i64; COLORS];
        for color in 1..=COLORS as u8 {
            let mut score = 0;
            for r1 in 0..HEIGHT {
                for c1 in 0..WIDTH {
                    if grid[r1][c1] == color {
                        score += self.cell_points(fixed, r1, c1);
                    }
                    let (mut r2, mut c2) = (r1 + 1, c1 + 1);
                    while r2 < HEIGHT && c2 < WIDTH {
                        score += self.evaluate_rectangle(grid, fixed, color, r1, c1, r2, c2);
                        r2 += 1;
                        c2 += 1;
                    }
                }
            }
            scores[color as usize - 1] = score;
        }
        scores
    }

    /// `score[my] - score[his]`, via a traversal that only visits cells of
    /// the two colors. Must equal the difference of the corresponding
    /// [`Analysis::evaluate_all_colors`] entries.
    ///
    /// Each square is scored from exactly one corner: the top-left if it
    /// holds the color, else the bottom-left, else the bottom-right. The
    /// guard conditions below keep that partition exact; both traversals
    /// must change together or the equality breaks.
    pub fn evaluate_two_colors(&self, grid: &Grid, fixed: &Grid, my_color: u8, his_color: u8) -> i64 {
        let mut res = 0;
        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                if grid[r][c] == my_color {
                    res += self.cell_points(fixed, r, c);
                } else if grid[r][c] == his_color {
                    res -= self.cell_points(fixed, r, c);
                }
            }
        }
        for r1 in 0..HEIGHT {
            for c1 in 0..WIDTH {
                let cell = grid[r1][c1];
                let (color, sign) = if cell == my_color {
                    (my_color, 1)
                } else if cell == his_color {
                    (his_color, -1)
                } else {
                    continue;
                };
                // (r1,c1) as top-left corner.
                let (mut r2, mut c2) = (r1 + 1, c1 + 1);
                while r2 < HEIGHT && c2 < WIDTH {
                    res += sign * self.evaluate_rectangle(grid, fixed, color, r1, c1, r2, c2);
                    r2 += 1;
                    c2 += 1;
                }
                // (r1,c1) as bottom-left corner; skip squares the top-left
                // corner already claimed.
                let mut r2 = r1 as isize - 1;
                let mut c2 = c1 + 1;
                while r2 >= 0 && c2 < WIDTH {
                    if grid[r2 as usize][c1] != color {
                        res += sign
                            * self.evaluate_rectangle(grid, fixed, color, r2 as usize, c1, r1, c2);
                    }
                    r2 -= 1;
                    c2 += 1;
                }
                // (r1,c1) as bottom-right corner; only squares neither the
                // top-left nor the bottom-left corner claims.
                let mut r2 = r1 as isize - 1;
                let mut c2 = c1 as isize - 1;
                while r2 >= 0 && c2 >= 0 {
                    if grid[r1][c2 as usize] != color && grid[r2 as usize][c2 as usize] != color {
                        res += sign
                            * self.evaluate_rectangle(
                                grid,
                                fixed,
                                color,
                                r2 as usize,
                                c2 as usize,
                                r1,
                                c1,
                            );
                    }
                    r2 -= 1;
                    c2 -= 1;
                }
            }
        }
        res
    }
}

/// Points awarded for completed squares only, side length per square. This
/// matches the official end-of-game scoring, but is a poor intermediate
/// signal: it awards nothing for partially-formed squares.
pub fn evaluate_final_score(grid: &Grid) -> [i64; COLORS] {
    let mut scores = [0i64; COLORS];
    for r1 in 0..HEIGHT {
        for c1 in 0..WIDTH {
            let color = grid[r1][c1];
            if color < 1 || color > COLORS as u8 {
                continue;
            }
            let (mut r2, mut c2) = (r1 + 1, c1 + 1);
            while r2 < HEIGHT && c2 < WIDTH {
                if grid[r1][c2] == color && grid[r2][c1] == color && grid[r2][c2] == color {
                    scores[color as usize - 1] += (r2 - r1) as i64;
                }
                r2 += 1;
                c2 += 1;
            }
        }
    }
    scores
}
