// engine/src/engine/coding.rs
#![forbid(unsafe_code)]

// Referee line protocol:
//
//   placement string (3 chars): <row><col><orientation>
//   move string (9 chars):      <row><col><tile><orientation>
//
// with row in 'A'..'P', col in 'a'..'t', tile six distinct digits 1-6,
// orientation 'h' or 'v'.

use crate::engine::constants::{COLORS, HEIGHT, WIDTH};
use crate::engine::moves::{Move, Orientation, Placement, Tile};

pub fn parse_color(ch: char) -> Option<u8> {
    match ch {
        '1'..='6' => Some(ch as u8 - b'0'),
        _ => None,
    }
}

fn parse_row(ch: char) -> Option<u8> {
    let v = (ch as i32) - ('A' as i32);
    (0..HEIGHT as i32).contains(&v).then_some(v as u8)
}

fn parse_col(ch: char) -> Option<u8> {
    let v = (ch as i32) - ('a' as i32);
    (0..WIDTH as i32).contains(&v).then_some(v as u8)
}

pub fn parse_orientation(ch: char) -> Option<Orientation> {
    match ch {
        'h' => Some(Orientation::Horizontal),
        'v' => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Parses six distinct color digits. Rejects repeats.
pub fn parse_tile(s: &str) -> Option<Tile> {
    let bytes = s.as_bytes();
    if bytes.len() != COLORS {
        return None;
    }
    let mut tile: Tile = [0; COLORS];
    let mut seen = [false; COLORS + 1];
    for (i, &b) in bytes.iter().enumerate() {
        let color = parse_color(b as char)?;
        if seen[color as usize] {
            return None;
        }
        seen[color as usize] = true;
        tile[i] = color;
    }
    Some(tile)
}

pub fn parse_placement(s: &str) -> Option<Placement> {
    let bytes = s.as_bytes();
    if bytes.len() != 3 {
        return None;
    }
    Some(Placement {
        row: parse_row(bytes[0] as char)?,
        col: parse_col(bytes[1] as char)?,
        ori: parse_orientation(bytes[2] as char)?,
    })
}

pub fn parse_move(s: &str) -> Option<Move> {
    let bytes = s.as_bytes();
    if bytes.len() != 3 + COLORS || !s.is_ascii() {
        return None;
    }
    Some(Move {
        tile: parse_tile(&s[2..2 + COLORS])?,
        placement: Placement {
            row: parse_row(bytes[0] as char)?,
            col: parse_col(bytes[1] as char)?,
            ori: parse_orientation(bytes[2 + COLORS] as char)?,
        },
    })
}

fn orientation_char(ori: Orientation) -> char {
    if ori.is_horizontal() {
        'h'
    } else {
        'v'
    }
}

pub fn format_placement(placement: Placement) -> String {
    let mut s = String::with_capacity(3);
    s.push((b'A' + placement.row) as char);
    s.push((b'a' + placement.col) as char);
    s.push(orientation_char(placement.ori));
    s
}

pub fn format_tile(tile: &Tile) -> String {
    tile.iter().map(|&c| (b'0' + c) as char).collect()
}

pub fn format_move(mv: &Move) -> String {
    let mut s = String::with_capacity(3 + COLORS);
    s.push((b'A' + mv.placement.row) as char);
    s.push((b'a' + mv.placement.col) as char);
    s.push_str(&format_tile(&mv.tile));
    s.push(orientation_char(mv.placement.ori));
    s
}
