// engine/src/engine/grid.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{COLORS, HEIGHT, WIDTH};
use crate::engine::moves::{Orientation, Placement, Tile, ORIENTATIONS};

/// 16x20 matrix of colors; 0 = empty, 1..=6 = colors.
///
/// The fixed-cell map produced by [`calc_fixed`] reuses the same layout
/// with 0/1 values.
pub type Grid = [[u8; WIDTH]; HEIGHT];

pub fn empty_grid() -> Grid {
    [[0u8; WIDTH]; HEIGHT]
}

/// Writes the tile into the placement's footprint, overwriting prior values.
///
/// Horizontal: the top row holds the tile left-to-right, the bottom row
/// holds it reversed. Vertical: the left column holds the tile bottom-up,
/// the right column top-down.
pub fn execute_move(grid: &mut Grid, tile: &Tile, placement: Placement) {
    let r = placement.row as usize;
    let c = placement.col as usize;
    match placement.ori {
        Orientation::Horizontal => {
            for i in 0..COLORS {
                grid[r][c + i] = tile[i];
                grid[r + 1][c + COLORS - 1 - i] = tile[i];
            }
        }
        Orientation::Vertical => {
            for i in 0..COLORS {
                grid[r + COLORS - 1 - i][c] = tile[i];
                grid[r + i][c + 1] = tile[i];
            }
        }
    }
}

/// Number of already-colored cells under the placement's footprint.
pub fn overlap(grid: &Grid, placement: Placement) -> u32 {
    let (rows, cols) = placement.ori.extent();
    let r = placement.row as usize;
    let c = placement.col as usize;
    let mut count = 0;
    for dr in 0..rows {
        for dc in 0..cols {
            count += (grid[r + dr][c + dc] != 0) as u32;
        }
    }
    count
}

/// True iff a colored cell touches the footprint along one of its four
/// straight edges. Diagonal (corner) contact does not count.
pub fn adjacent(grid: &Grid, placement: Placement) -> bool {
    let (rows, cols) = placement.ori.extent();
    let r = placement.row as usize;
    let c = placement.col as usize;
    for dc in 0..cols {
        if r > 0 && grid[r - 1][c + dc] != 0 {
            return true;
        }
        if r + rows < HEIGHT && grid[r + rows][c + dc] != 0 {
            return true;
        }
    }
    for dr in 0..rows {
        if c > 0 && grid[r + dr][c - 1] != 0 {
            return true;
        }
        if c + cols < WIDTH && grid[r + dr][c + cols] != 0 {
            return true;
        }
    }
    false
}

/// A placement is legal when it is in bounds, overwrites at most 4 colored
/// cells, and either overlaps or touches the existing colored region.
pub fn is_valid(grid: &Grid, placement: Placement) -> bool {
    if !placement.in_bounds() {
        return false;
    }
    let count = overlap(grid, placement);
    count <= 4 && (count > 0 || adjacent(grid, placement))
}

/// The game ends when every 2x6 and 6x2 window holds at least 5 colored
/// cells, i.e. no placement can still overwrite at most 4.
pub fn is_game_over(grid: &Grid) -> bool {
    for r in 0..=HEIGHT - 2 {
        for c in 0..=WIDTH - COLORS {
            let mut count = 0;
            for i in 0..COLORS {
                count += (grid[r][c + i] != 0) as u32;
                count += (grid[r + 1][c + i] != 0) as u32;
            }
            if count <= 4 {
                return false;
            }
        }
    }
    for r in 0..=HEIGHT - COLORS {
        for c in 0..=WIDTH - 2 {
            let mut count = 0;
            for i in 0..COLORS {
                count += (grid[r + i][c] != 0) as u32;
                count += (grid[r + i][c + 1] != 0) as u32;
            }
            if count <= 4 {
                return false;
            }
        }
    }
    true
}

/// All legal placements, in lexicographic (row, col, orientation) order.
///
/// The order is part of the contract: search precomputation indexes into
/// this list, and ties in the selector keep their enumeration order.
pub fn generate_placements(grid: &Grid) -> Vec<Placement> {
    let mut placements = Vec::new();
    for row in 0..HEIGHT as u8 {
        for col in 0..WIDTH as u8 {
            for ori in ORIENTATIONS {
                let placement = Placement { row, col, ori };
                if is_valid(grid, placement) {
                    placements.push(placement);
                }
            }
        }
    }
    placements
}

/// Boolean grid marking cells no legal placement can still overwrite.
///
/// Starts all-fixed; every window that a placement could still claim
/// (at most 4 colored cells) clears its 12 cells.
pub fn calc_fixed(grid: &Grid) -> Grid {
    let mut fixed = [[1u8; WIDTH]; HEIGHT];
    for r in 0..=HEIGHT - 2 {
        for c in 0..=WIDTH - COLORS {
            let mut count = 0;
            for i in 0..COLORS {
                count += (grid[r][c + i] != 0) as u32;
                count += (grid[r + 1][c + i] != 0) as u32;
            }
            if count <= 4 {
                for i in 0..COLORS {
                    fixed[r][c + i] = 0;
                    fixed[r + 1][c + i] = 0;
                }
            }
        }
    }
    for r in 0..=HEIGHT - COLORS {
        for c in 0..=WIDTH - 2 {
            let mut count = 0;
            for i in 0..COLORS {
                count += (grid[r + i][c] != 0) as u32;
                count += (grid[r + i][c + 1] != 0) as u32;
            }
            if count <= 4 {
                for i in 0..COLORS {
                    fixed[r + i][c] = 0;
                    fixed[r + i][c + 1] = 0;
                }
            }
        }
    }
    fixed
}
