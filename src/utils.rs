use crate::color::Color;
use crate::geometry::Point;

/// Default simulation bounds (width, height)
pub const SCREEN_SIZE: (i32, i32) = (700, 500);

/// Default block side length in pixels
pub const BLOCK_SIZE: i32 = 50;

/// Per-axis velocity range for new blocks, inclusive
pub const MIN_SPEED: i32 = -5;
/// Upper end of the velocity range
pub const MAX_SPEED: i32 = 5;

/// Single-unit backtracking steps allowed before a block is removed
pub const MAX_BACKTRACK_STEPS: u32 = 1000;

/// Blocks present when a simulation starts or resets
pub const START_BLOCKS: [(Color, Point); 4] = [
    (Color::TOMATO, Point::new(50, 50)),
    (Color::CYAN, Point::new(240, 340)),
    (Color::YELLOW, Point::new(180, 250)),
    (Color::GREEN, Point::new(35, 450)),
];
