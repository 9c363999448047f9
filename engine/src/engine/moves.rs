// engine/src/engine/moves.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{COLORS, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

pub const ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

impl Orientation {
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }

    /// Footprint extent as (rows, columns).
    #[inline]
    pub fn extent(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (2, COLORS),
            Orientation::Vertical => (COLORS, 2),
        }
    }
}

/// Six distinct colors in 1..=6, as handed out by the referee each turn.
pub type Tile = [u8; COLORS];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: u8,
    pub col: u8,
    pub ori: Orientation,
}

/// The game's first tile is always placed here.
pub const INITIAL_PLACEMENT: Placement = Placement {
    row: 7,
    col: 7,
    ori: Orientation::Horizontal,
};

impl Placement {
    #[inline]
    pub fn in_bounds(self) -> bool {
        let (rows, cols) = self.ori.extent();
        (self.row as usize) + rows <= HEIGHT && (self.col as usize) + cols <= WIDTH
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub tile: Tile,
    pub placement: Placement,
}
