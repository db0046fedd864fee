//! Hit testing - resolve a board-local pointer position to what it is over.
//!
//! Candidates come from the R-tree; the topmost candidate by `z_index` wins,
//! then the position is matched against that note's chrome. An open color
//! picker counts as part of its note, so it stacks with the note.

use std::collections::HashSet;

use serde::Serialize;

use crate::board::Board;
use crate::constants::{
    NOTE_BORDER_WIDTH, NOTE_BUTTON_GAP, NOTE_BUTTON_SIZE, NOTE_HEADER_HEIGHT, NOTE_HEADER_PADDING,
    PICKER_OFFSET_Y, PICKER_PADDING, RESIZE_HANDLE_SIZE, SWATCH_GAP, SWATCH_SIZE,
};
use crate::spatial_index::SpatialIndex;
use crate::types::{Note, NoteColor, NoteId};

/// Axis-aligned rectangle in board-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn contains(&self, p: (f32, f32)) -> bool {
        p.0 >= self.x && p.0 <= self.right() && p.1 >= self.y && p.1 <= self.bottom()
    }
}

/// Inline controls on a note that never start a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NoteControl {
    /// Opens and closes the color picker
    ColorButton,
    /// Deletes the note
    DeleteButton,
    /// Picker background between swatches
    Picker,
}

/// Identity of the element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PointerTarget {
    /// Empty board background
    Board,
    /// Header bar or border: starts a move
    NoteSurface(NoteId),
    /// Bottom-right corner: starts a resize
    ResizeHandle(NoteId),
    /// Text area: focuses the note for editing
    Content(NoteId),
    Control(NoteId, NoteControl),
    /// A palette swatch in an open picker
    Swatch(NoteId, NoteColor),
}

impl PointerTarget {
    pub fn note(&self) -> Option<NoteId> {
        match *self {
            PointerTarget::Board => None,
            PointerTarget::NoteSurface(id)
            | PointerTarget::ResizeHandle(id)
            | PointerTarget::Content(id)
            | PointerTarget::Control(id, _)
            | PointerTarget::Swatch(id, _) => Some(id),
        }
    }
}

/// Geometry of a note's chrome, shared by hit testing and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteLayout {
    pub bounds: Rect,
    pub header: Rect,
    pub color_button: Rect,
    pub delete_button: Rect,
    pub content: Rect,
    pub resize_handle: Rect,
    pub picker: Rect,
}

impl NoteLayout {
    pub fn of(note: &Note) -> Self {
        let (x, y) = note.position;
        let (w, h) = note.size;
        let bounds = Rect::new(x, y, w, h);
        let header = Rect::new(x, y, w, NOTE_HEADER_HEIGHT);

        let button_y = y + (NOTE_HEADER_HEIGHT - NOTE_BUTTON_SIZE) / 2.0;
        let delete_button = Rect::new(
            bounds.right() - NOTE_HEADER_PADDING - NOTE_BUTTON_SIZE,
            button_y,
            NOTE_BUTTON_SIZE,
            NOTE_BUTTON_SIZE,
        );
        let color_button = Rect::new(
            delete_button.x - NOTE_BUTTON_GAP - NOTE_BUTTON_SIZE,
            button_y,
            NOTE_BUTTON_SIZE,
            NOTE_BUTTON_SIZE,
        );

        let content = Rect::new(
            x + NOTE_BORDER_WIDTH,
            header.bottom(),
            (w - 2.0 * NOTE_BORDER_WIDTH).max(0.0),
            (h - NOTE_HEADER_HEIGHT - NOTE_BORDER_WIDTH).max(0.0),
        );
        let resize_handle = Rect::new(
            bounds.right() - RESIZE_HANDLE_SIZE,
            bounds.bottom() - RESIZE_HANDLE_SIZE,
            RESIZE_HANDLE_SIZE,
            RESIZE_HANDLE_SIZE,
        );

        let swatches = NoteColor::ALL.len() as f32;
        let picker_w = 2.0 * PICKER_PADDING + swatches * SWATCH_SIZE + (swatches - 1.0) * SWATCH_GAP;
        let picker_h = 2.0 * PICKER_PADDING + SWATCH_SIZE;
        let picker = Rect::new(
            color_button.right() - picker_w,
            color_button.bottom() + PICKER_OFFSET_Y,
            picker_w,
            picker_h,
        );

        Self {
            bounds,
            header,
            color_button,
            delete_button,
            content,
            resize_handle,
            picker,
        }
    }

    pub fn swatch(&self, color: NoteColor) -> Rect {
        let i = color.index() as f32;
        Rect::new(
            self.picker.x + PICKER_PADDING + i * (SWATCH_SIZE + SWATCH_GAP),
            self.picker.y + PICKER_PADDING,
            SWATCH_SIZE,
            SWATCH_SIZE,
        )
    }

    /// Resolve a point inside this note (or its open picker) to a target.
    pub fn target_at(&self, id: NoteId, p: (f32, f32), picker_open: bool) -> Option<PointerTarget> {
        if picker_open && self.picker.contains(p) {
            let swatch = NoteColor::ALL.into_iter().find(|c| self.swatch(*c).contains(p));
            return Some(match swatch {
                Some(color) => PointerTarget::Swatch(id, color),
                None => PointerTarget::Control(id, NoteControl::Picker),
            });
        }
        if !self.bounds.contains(p) {
            return None;
        }
        let target = if self.delete_button.contains(p) {
            PointerTarget::Control(id, NoteControl::DeleteButton)
        } else if self.color_button.contains(p) {
            PointerTarget::Control(id, NoteControl::ColorButton)
        } else if self.resize_handle.contains(p) {
            PointerTarget::ResizeHandle(id)
        } else if self.content.contains(p) {
            PointerTarget::Content(id)
        } else {
            PointerTarget::NoteSurface(id)
        };
        Some(target)
    }
}

/// Hit tester with an R-tree cache keyed to the board revision.
#[derive(Default)]
pub struct HitTester {
    index: SpatialIndex,
    indexed_revision: Option<u64>,
}

impl HitTester {
    fn sync(&mut self, board: &Board) {
        if self.indexed_revision != Some(board.revision()) {
            self.index.rebuild(board.notes());
            self.indexed_revision = Some(board.revision());
        }
    }

    /// Find the target under board-local point `p`.
    pub fn target_at(
        &mut self,
        board: &Board,
        open_pickers: &HashSet<NoteId>,
        p: (f32, f32),
    ) -> PointerTarget {
        crate::profile_scope!("hit_test");
        self.sync(board);

        let mut candidates: Vec<NoteId> = self.index.query_point(p.0, p.1);
        // Pickers hang outside their note's bounds, so the R-tree misses them
        for id in open_pickers {
            if !candidates.contains(id) {
                candidates.push(*id);
            }
        }

        let mut hits: Vec<(&Note, PointerTarget)> = candidates
            .into_iter()
            .filter_map(|id| board.note(id))
            .filter_map(|note| {
                NoteLayout::of(note)
                    .target_at(note.id, p, open_pickers.contains(&note.id))
                    .map(|target| (note, target))
            })
            .collect();

        hits.sort_by_key(|(note, _)| std::cmp::Reverse(note.z_index));
        hits.first().map(|(_, target)| *target).unwrap_or(PointerTarget::Board)
    }
}
