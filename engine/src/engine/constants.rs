// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

pub const HEIGHT: usize = 16;
pub const WIDTH: usize = 20;
pub const COLORS: usize = 6;
