//! Pointer down handling - gesture start and control arming.
//!
//! A pointer down on the resize handle starts a resize and nothing else; the
//! move handler never sees it. Pointer downs on inline controls only arm a
//! click and never start a move.

use tracing::{debug, warn};

use super::PointerEvent;
use crate::app::NotesApp;
use crate::constants::SLOW_INPUT_THRESHOLD_MS;
use crate::hit_testing::PointerTarget;
use crate::perf::{Operation, measure};
use crate::profile_scope;
use crate::types::NoteId;

impl NotesApp {
    /// Handle a pointer down whose target the input layer already knows.
    pub fn handle_pointer_down(&mut self, event: PointerEvent) {
        profile_scope!("handle_pointer_down");

        let ((), elapsed_ms) = measure(|| self.dispatch_pointer_down(event));
        self.system.perf_monitor.record(Operation::PointerDown, elapsed_ms);
        if elapsed_ms > SLOW_INPUT_THRESHOLD_MS {
            warn!(elapsed_ms, "Slow pointer down");
        }
    }

    /// Hit test `position`, then handle it as a pointer down.
    pub fn pointer_down_at(&mut self, position: (f32, f32)) -> PointerTarget {
        let target = self.hit_test(position);
        self.handle_pointer_down(PointerEvent::new(position, target));
        target
    }

    /// Resolve a board-local position to the element under it.
    pub fn hit_test(&mut self, position: (f32, f32)) -> PointerTarget {
        self.system
            .hit_tester
            .target_at(&self.board, &self.pickers.open, position)
    }

    fn dispatch_pointer_down(&mut self, event: PointerEvent) {
        // A pointer up got lost somewhere; never leave two gestures alive
        let stale = self.canvas.input_state.reset();
        if stale.is_active() {
            debug!(note = ?stale.target(), "Ending stale gesture on pointer down");
        }
        self.canvas.pressed = None;

        match event.target {
            PointerTarget::Board => {
                self.editing.editing_id = None;
            }
            PointerTarget::NoteSurface(id) => {
                self.editing.editing_id = None;
                self.begin_move(id, event.position);
            }
            PointerTarget::ResizeHandle(id) => {
                self.editing.editing_id = None;
                self.begin_resize(id, event.position);
            }
            PointerTarget::Content(id) => {
                self.focus_content(id);
            }
            PointerTarget::Control(..) | PointerTarget::Swatch(..) => {
                self.canvas.pressed = Some(event.target);
            }
        }
    }

    fn begin_move(&mut self, id: NoteId, pointer: (f32, f32)) {
        let Some(note) = self.board.note(id) else {
            return;
        };
        let offset = (pointer.0 - note.position.0, pointer.1 - note.position.1);

        self.board.raise_note(id);
        self.canvas.input_state.start_dragging(id, offset);
        debug!(%id, dx = offset.0, dy = offset.1, "Move gesture started");
    }

    fn begin_resize(&mut self, id: NoteId, pointer: (f32, f32)) {
        let Some(note) = self.board.note(id) else {
            return;
        };
        let start_size = note.size;

        self.board.raise_note(id);
        self.canvas.input_state.start_resizing(id, pointer, start_size);
        debug!(%id, w = start_size.0, h = start_size.1, "Resize gesture started");
    }
}
