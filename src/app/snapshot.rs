//! Serializable render input.
//!
//! A presentation layer that does not link against `NotesApp` directly can
//! draw everything from one of these.

use serde::Serialize;

use super::NotesApp;
use crate::input::{InputState, ListenerScope};
use crate::types::{Note, NoteId};

/// Summary of the active gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureSnapshot {
    Idle,
    Moving { note_id: NoteId, scope: ListenerScope },
    Resizing { note_id: NoteId, scope: ListenerScope },
}

impl From<&InputState> for GestureSnapshot {
    fn from(state: &InputState) -> Self {
        match *state {
            InputState::Idle => GestureSnapshot::Idle,
            InputState::DraggingNote { note_id, .. } => GestureSnapshot::Moving {
                note_id,
                scope: ListenerScope::Board,
            },
            InputState::ResizingNote { note_id, .. } => GestureSnapshot::Resizing {
                note_id,
                scope: ListenerScope::Handle,
            },
        }
    }
}

/// Everything needed to draw one frame, back-to-front.
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    /// Notes in ascending `z_index`
    pub notes: Vec<Note>,
    pub gesture: GestureSnapshot,
    /// Notes with an open color picker, ascending by id
    pub open_pickers: Vec<NoteId>,
    pub editing: Option<NoteId>,
}

impl NotesApp {
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let mut open_pickers: Vec<NoteId> = self.pickers.open.iter().copied().collect();
        open_pickers.sort();

        RenderSnapshot {
            notes: self.board.render_order().cloned().collect(),
            gesture: GestureSnapshot::from(&self.canvas.input_state),
            open_pickers,
            editing: self.editing.editing_id,
        }
    }
}
