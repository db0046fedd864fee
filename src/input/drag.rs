//! Pointer move handling - clamped move and resize updates.
//!
//! Called for every pointer move, so it exits early when idle. Each update is
//! a whole-field merge keyed by note id; if the note was deleted mid-gesture
//! the merge is a no-op and the gesture lingers until pointer up.

use super::PointerEvent;
use super::coords::clamp_to_edge;
use crate::app::NotesApp;
use crate::input::InputState;
use crate::perf::{Operation, measure};
use crate::profile_scope;
use crate::types::{NoteUpdate, clamp_note_size};

impl NotesApp {
    /// Apply a pointer move to the active gesture. Returns true if a note changed.
    pub fn handle_pointer_move(&mut self, event: PointerEvent) -> bool {
        profile_scope!("handle_pointer_move");

        let (changed, elapsed_ms) = measure(|| self.apply_move(event.position));
        if changed {
            self.system.perf_monitor.record(Operation::PointerMove, elapsed_ms);
        }
        changed
    }

    fn apply_move(&mut self, (x, y): (f32, f32)) -> bool {
        match self.canvas.input_state {
            InputState::Idle => false,
            InputState::DraggingNote { note_id, offset } => {
                let viewport = self.canvas.viewport;
                let (margin_x, margin_y) = self.settings.drag_margin;
                let position = (
                    clamp_to_edge(x - offset.0, viewport.width - margin_x),
                    clamp_to_edge(y - offset.1, viewport.height - margin_y),
                );
                self.board.update_note(note_id, NoteUpdate::position(position))
            }
            InputState::ResizingNote {
                note_id,
                start_pos,
                start_size,
            } => {
                let size = clamp_note_size((
                    start_size.0 + (x - start_pos.0),
                    start_size.1 + (y - start_pos.1),
                ));
                self.board.update_note(note_id, NoteUpdate::size(size))
            }
        }
    }

    /// Pointer move over empty board, for input layers without hit testing.
    pub fn pointer_move_at(&mut self, position: (f32, f32)) -> bool {
        self.handle_pointer_move(PointerEvent::on_board(position))
    }
}
