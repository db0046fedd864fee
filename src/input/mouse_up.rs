//! Pointer up handling - end the gesture, fire armed clicks.

use tracing::debug;

use super::PointerEvent;
use crate::app::NotesApp;
use crate::hit_testing::{NoteControl, PointerTarget};
use crate::perf::{Operation, measure};
use crate::profile_scope;

impl NotesApp {
    /// End the active gesture unconditionally, then fire a click if the
    /// pointer went down and up on the same control.
    pub fn handle_pointer_up(&mut self, event: PointerEvent) {
        profile_scope!("handle_pointer_up");

        let ((), elapsed_ms) = measure(|| self.finish_pointer(event.target));
        self.system.perf_monitor.record(Operation::PointerUp, elapsed_ms);
    }

    fn finish_pointer(&mut self, released_on: PointerTarget) {
        let ended = self.canvas.input_state.reset();
        if let Some(scope) = ended.listener_scope() {
            debug!(note = ?ended.target(), ?scope, "Gesture ended, listeners detached");
        }

        if let Some(pressed) = self.canvas.pressed.take() {
            if pressed == released_on {
                self.click(pressed);
            }
        }
    }

    /// Hit test `position`, then handle it as a pointer up.
    pub fn pointer_up_at(&mut self, position: (f32, f32)) -> PointerTarget {
        let target = self.hit_test(position);
        self.handle_pointer_up(PointerEvent::new(position, target));
        target
    }

    fn click(&mut self, target: PointerTarget) {
        match target {
            PointerTarget::Control(id, NoteControl::ColorButton) => {
                self.toggle_color_picker(id);
            }
            PointerTarget::Control(id, NoteControl::DeleteButton) => {
                self.delete_note(id);
            }
            PointerTarget::Swatch(id, color) => {
                self.select_color(id, color);
            }
            PointerTarget::Control(_, NoteControl::Picker)
            | PointerTarget::Board
            | PointerTarget::NoteSurface(_)
            | PointerTarget::ResizeHandle(_)
            | PointerTarget::Content(_) => {}
        }
    }
}
