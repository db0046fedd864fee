//! Note actions - create, delete, recolor and edit.
//!
//! These run between gesture updates and never touch the gesture state, so
//! they can interleave with an active move or resize.

use tracing::debug;

use super::NotesApp;
use crate::types::{NoteColor, NoteId, NoteUpdate};

impl NotesApp {
    pub fn create_note(&mut self) -> NoteId {
        self.board.create_note()
    }

    /// Delete a note along with its picker and edit focus.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let removed = self.board.delete_note(id);
        self.pickers.open.remove(&id);
        if self.editing.editing_id == Some(id) {
            self.editing.editing_id = None;
        }
        removed
    }

    pub fn is_picker_open(&self, id: NoteId) -> bool {
        self.pickers.open.contains(&id)
    }

    /// Open or close the color picker of a note.
    pub fn toggle_color_picker(&mut self, id: NoteId) -> bool {
        if !self.board.contains(id) {
            return false;
        }
        if !self.pickers.open.remove(&id) {
            self.pickers.open.insert(id);
        }
        debug!(%id, open = self.is_picker_open(id), "Toggled color picker");
        true
    }

    /// Apply a palette color and close the picker.
    pub fn select_color(&mut self, id: NoteId, color: NoteColor) -> bool {
        self.pickers.open.remove(&id);
        self.board.update_note(id, NoteUpdate::color(color))
    }

    /// Give a note's text area the edit focus.
    pub fn focus_content(&mut self, id: NoteId) -> bool {
        if !self.board.contains(id) {
            return false;
        }
        self.editing.editing_id = Some(id);
        true
    }

    pub fn blur_content(&mut self) -> Option<NoteId> {
        self.editing.editing_id.take()
    }

    pub fn editing_note(&self) -> Option<NoteId> {
        self.editing.editing_id
    }

    /// Replace a note's text.
    pub fn set_content(&mut self, id: NoteId, text: impl Into<String>) -> bool {
        self.board.update_note(id, NoteUpdate::content(text))
    }
}
