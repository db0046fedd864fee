//! Pointer input handling for the board.
//!
//! This module implements the pointer gesture controller: pointer events
//! come in, board mutations go out.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the active gesture. Attaching and detaching gesture listeners is entering
//! and leaving a non-Idle state, so it can be driven by synthetic event
//! sequences in tests.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `coords` - Window/board coordinate conversion and edge clamping
//! - `mouse_down` - Pointer down handling (move/resize start, control arming)
//! - `drag` - Pointer move handling (clamped move and resize updates)
//! - `mouse_up` - Pointer up handling (gesture end, control clicks)

pub mod coords;
mod state;
mod mouse_down;
mod drag;
mod mouse_up;

pub use state::{InputState, ListenerScope};

use crate::hit_testing::PointerTarget;

/// A raw pointer event in board-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: (f32, f32),
    /// Element under the pointer, as reported by the input layer
    pub target: PointerTarget,
}

impl PointerEvent {
    pub fn new(position: (f32, f32), target: PointerTarget) -> Self {
        Self { position, target }
    }

    /// An event over empty board.
    pub fn on_board(position: (f32, f32)) -> Self {
        Self::new(position, PointerTarget::Board)
    }
}
