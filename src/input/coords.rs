//! Coordinate conversion utilities for board interactions.
//!
//! The board is drawn below the menu bar, so window positions and
//! board-local positions differ by the header height on the y axis.

use crate::constants::HEADER_HEIGHT;

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a window position to board-local coordinates
    #[inline]
    pub fn window_to_board(window_pos: (f32, f32)) -> (f32, f32) {
        (window_pos.0, window_pos.1 - HEADER_HEIGHT)
    }

    /// Convert a board-local position to window coordinates
    #[inline]
    pub fn board_to_window(board_pos: (f32, f32)) -> (f32, f32) {
        (board_pos.0, board_pos.1 + HEADER_HEIGHT)
    }

    /// Board area left over after the menu bar, given the window size
    #[inline]
    pub fn board_size(window_size: (f32, f32)) -> (f32, f32) {
        (window_size.0, (window_size.1 - HEADER_HEIGHT).max(0.0))
    }
}

/// Clamp `value` into `[0, upper]`, settling on 0 when `upper` is negative.
#[inline]
pub fn clamp_to_edge(value: f32, upper: f32) -> f32 {
    value.min(upper).max(0.0)
}
