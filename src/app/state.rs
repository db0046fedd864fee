//! Application state - the NotesApp struct definition and sub-structs.

use std::collections::HashSet;

use crate::board::Board;
use crate::hit_testing::{HitTester, PointerTarget};
use crate::input::InputState;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::types::{NoteId, Viewport};

/// Pointer interaction state on the board
#[derive(Default)]
pub struct CanvasState {
    /// Input state machine for move/resize gestures
    pub input_state: InputState,
    /// Visible board area, read at every move update
    pub viewport: Viewport,
    /// Control armed by pointer down; fires if pointer up lands on it too
    pub pressed: Option<PointerTarget>,
}

/// Per-note color picker popovers
#[derive(Default)]
pub struct ColorPickerState {
    /// Notes whose picker is currently open
    pub open: HashSet<NoteId>,
}

/// Content editing focus
#[derive(Default)]
pub struct EditState {
    /// Note whose text area has focus
    pub editing_id: Option<NoteId>,
}

/// Hit testing and performance bookkeeping
#[derive(Default)]
pub struct SystemState {
    pub hit_tester: HitTester,
    pub perf_monitor: PerfMonitor,
}

/// The whole board application: single owner of every piece of UI state.
pub struct NotesApp {
    /// The notes and their stacking order
    pub board: Board,
    /// Gesture state and board geometry
    pub canvas: CanvasState,
    /// Open color pickers
    pub pickers: ColorPickerState,
    /// Text editing focus
    pub editing: EditState,
    pub settings: Settings,
    pub system: SystemState,
}
