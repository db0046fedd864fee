//! Board state store.
//!
//! Owns every live note, the stacking counter and id allocation. All
//! operations are total: an unknown id is a silent no-op reported through the
//! `bool` return value.

use chrono::{Duration, Utc};
use rand::Rng;
use tracing::debug;

use crate::constants::{
    DEFAULT_NOTE_SIZE, FIRST_Z_INDEX, NOTE_BASE_ORIGIN, NOTE_STAGGER_SLOTS, NOTE_STAGGER_STEP,
};
use crate::types::{Note, NoteColor, NoteId, NoteUpdate};

const WELCOME_TEXT: &str = "👻 Welcome to Spooky Notes!\n\n• Click + to add notes\n• Drag to move\n• Resize from corner\n\nHappy Halloween! 🎃";
const CANDY_TEXT: &str = "🍬 Candy List:\n- Snickers\n- Reeses\n- Kit Kat\n- Skittles";

/// Placement of freshly created notes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub origin: (f32, f32),
    pub step: f32,
    pub slots: usize,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            origin: NOTE_BASE_ORIGIN,
            step: NOTE_STAGGER_STEP,
            slots: NOTE_STAGGER_SLOTS,
        }
    }
}

impl Placement {
    /// Position for a note created while `count` notes already exist.
    pub fn position_for(&self, count: usize) -> (f32, f32) {
        let offset = (count % self.slots.max(1)) as f32 * self.step;
        (self.origin.0 + offset, self.origin.1 + offset)
    }
}

/// The collection of live notes plus the z-order counter.
#[derive(Clone, Debug)]
pub struct Board {
    /// Notes in creation order
    notes: Vec<Note>,
    /// Strictly greater than every z_index ever issued
    next_z: u64,
    next_id: u64,
    placement: Placement,
    /// Bumped on every mutation so caches can tell when to rebuild
    revision: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_placement(Placement::default())
    }

    pub fn with_placement(placement: Placement) -> Self {
        Self {
            notes: Vec::new(),
            next_z: FIRST_Z_INDEX,
            next_id: 1,
            placement,
            revision: 0,
        }
    }

    /// A board holding the two notes the app greets new users with.
    pub fn with_welcome_notes(placement: Placement) -> Self {
        let mut board = Self::with_placement(placement);
        let now = Utc::now();

        board.insert_note((40.0, 60.0), (220.0, 180.0), WELCOME_TEXT, NoteColor::Orange, now);
        board.insert_note(
            (300.0, 100.0),
            (200.0, 160.0),
            CANDY_TEXT,
            NoteColor::Purple,
            now - Duration::days(1),
        );
        board
    }

    // ==================== Queries ====================

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.note(id).is_some()
    }

    /// The value the next create or raise will receive.
    pub fn next_z(&self) -> u64 {
        self.next_z
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Notes back-to-front (ascending `z_index`), sorted fresh on every call.
    pub fn render_order(&self) -> impl Iterator<Item = &Note> {
        let mut ordered: Vec<&Note> = self.notes.iter().collect();
        ordered.sort_by_key(|n| n.z_index);
        ordered.into_iter()
    }

    /// The note currently drawn on top, if any.
    pub fn topmost(&self) -> Option<&Note> {
        self.notes.iter().max_by_key(|n| n.z_index)
    }

    // ==================== Mutations ====================

    /// Append a new empty note with a random palette color.
    pub fn create_note(&mut self) -> NoteId {
        self.create_note_with_rng(&mut rand::thread_rng())
    }

    /// Append a new empty note, drawing its color from `rng`.
    pub fn create_note_with_rng<R: Rng>(&mut self, rng: &mut R) -> NoteId {
        let color = NoteColor::ALL[rng.gen_range(0..NoteColor::ALL.len())];
        let position = self.placement.position_for(self.notes.len());
        self.insert_note(position, DEFAULT_NOTE_SIZE, "", color, Utc::now())
    }

    fn insert_note(
        &mut self,
        position: (f32, f32),
        size: (f32, f32),
        content: &str,
        color: NoteColor,
        created_at: chrono::DateTime<Utc>,
    ) -> NoteId {
        let id = NoteId(self.next_id);
        self.next_id += 1;
        let z_index = self.take_z();

        self.notes.push(Note {
            id,
            position,
            size,
            content: content.to_string(),
            color,
            z_index,
            created_at,
        });
        self.revision += 1;
        debug!(%id, z_index, x = position.0, y = position.1, "Created note");
        id
    }

    /// Merge `update` into the note with `id`. Returns false if no such note.
    pub fn update_note(&mut self, id: NoteId, update: NoteUpdate) -> bool {
        match self.note_mut(id) {
            Some(note) => {
                update.apply_to(note);
                self.revision += 1;
                true
            }
            None => {
                debug!(%id, "Ignoring update for missing note");
                false
            }
        }
    }

    /// Remove the note with `id`. Returns false if no such note.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        if removed {
            self.revision += 1;
            debug!(%id, remaining = self.notes.len(), "Deleted note");
        }
        removed
    }

    /// Move the note with `id` above every other note.
    pub fn raise_note(&mut self, id: NoteId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let z_index = self.take_z();
        if let Some(note) = self.note_mut(id) {
            note.z_index = z_index;
        }
        self.revision += 1;
        debug!(%id, z_index, "Raised note");
        true
    }

    fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.id == id)
    }

    fn take_z(&mut self) -> u64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }
}
