//! Input state machine - the single record of the active pointer gesture.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingNote   (pointer down on a note's surface)
//! Idle -> ResizingNote   (pointer down on a note's resize handle)
//!
//! Any -> Idle            (pointer up, or teardown)
//! ```
//!
//! Only one variant can be live at a time, so a move and a resize can never
//! run together.

use serde::Serialize;

use crate::types::NoteId;

/// Which set of pointer listeners a gesture holds while it is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListenerScope {
    /// Board-wide move/up listeners owned by the move gesture
    Board,
    /// Transient move/up listeners owned by a single resize handle
    Handle,
}

/// Unified input state for pointer gestures.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Moving a note
    DraggingNote {
        note_id: NoteId,
        /// Pointer position minus note position at gesture start
        offset: (f32, f32),
    },

    /// Resizing a note from its corner handle
    ResizingNote {
        note_id: NoteId,
        /// Pointer position at gesture start
        start_pos: (f32, f32),
        /// Note size at gesture start
        start_size: (f32, f32),
    },
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any gesture is active
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if currently dragging a note
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingNote { .. })
    }

    /// Returns true if currently resizing a note
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingNote { .. })
    }

    /// The note the active gesture targets
    pub fn target(&self) -> Option<NoteId> {
        match self {
            Self::Idle => None,
            Self::DraggingNote { note_id, .. } | Self::ResizingNote { note_id, .. } => Some(*note_id),
        }
    }

    /// Get the note ID being dragged, if any
    pub fn dragged_note(&self) -> Option<NoteId> {
        match self {
            Self::DraggingNote { note_id, .. } => Some(*note_id),
            _ => None,
        }
    }

    /// Get the note ID being resized, if any
    pub fn resized_note(&self) -> Option<NoteId> {
        match self {
            Self::ResizingNote { note_id, .. } => Some(*note_id),
            _ => None,
        }
    }

    /// Listener scope held by the active gesture
    pub fn listener_scope(&self) -> Option<ListenerScope> {
        match self {
            Self::Idle => None,
            Self::DraggingNote { .. } => Some(ListenerScope::Board),
            Self::ResizingNote { .. } => Some(ListenerScope::Handle),
        }
    }

    /// Start dragging a note
    pub fn start_dragging(&mut self, note_id: NoteId, offset: (f32, f32)) {
        *self = Self::DraggingNote { note_id, offset };
    }

    /// Start resizing a note
    pub fn start_resizing(&mut self, note_id: NoteId, start_pos: (f32, f32), start_size: (f32, f32)) {
        *self = Self::ResizingNote {
            note_id,
            start_pos,
            start_size,
        };
    }

    /// Reset to Idle, returning the gesture that was active
    pub fn reset(&mut self) -> InputState {
        std::mem::take(self)
    }
}
