//! Core types for the notes board.
//!
//! This module defines the note record, its palette, and the partial update
//! record accepted by the board store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{MIN_NOTE_HEIGHT, MIN_NOTE_WIDTH};

/// Opaque identifier of a note. Never reused once handed out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "note-{}", self.0)
    }
}

// ============================================================================
// Palette
// ============================================================================

/// The fixed six-entry note palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteColor {
    #[default]
    Orange,
    Purple,
    Green,
    Black,
    Red,
    Yellow,
}

/// Display colors for one palette entry, as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoteTheme {
    pub body: u32,
    pub header: u32,
    pub text: u32,
}

impl NoteColor {
    pub const ALL: [NoteColor; 6] = [
        NoteColor::Orange,
        NoteColor::Purple,
        NoteColor::Green,
        NoteColor::Black,
        NoteColor::Red,
        NoteColor::Yellow,
    ];

    /// Position of this color in the palette
    pub fn index(self) -> usize {
        match self {
            NoteColor::Orange => 0,
            NoteColor::Purple => 1,
            NoteColor::Green => 2,
            NoteColor::Black => 3,
            NoteColor::Red => 4,
            NoteColor::Yellow => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            NoteColor::Orange => "Orange",
            NoteColor::Purple => "Purple",
            NoteColor::Green => "Green",
            NoteColor::Black => "Black",
            NoteColor::Red => "Red",
            NoteColor::Yellow => "Yellow",
        }
    }

    pub fn theme(self) -> NoteTheme {
        match self {
            NoteColor::Orange => NoteTheme { body: 0xfb923c, header: 0xf97316, text: 0x431407 },
            NoteColor::Purple => NoteTheme { body: 0xc084fc, header: 0xa855f7, text: 0x3b0764 },
            NoteColor::Green => NoteTheme { body: 0xa3e635, header: 0x84cc16, text: 0x1a2e05 },
            NoteColor::Black => NoteTheme { body: 0x1f2937, header: 0x111827, text: 0xf3f4f6 },
            NoteColor::Red => NoteTheme { body: 0xef4444, header: 0xdc2626, text: 0x450a0a },
            NoteColor::Yellow => NoteTheme { body: 0xfacc15, header: 0xeab308, text: 0x422006 },
        }
    }
}

// ============================================================================
// Note
// ============================================================================

/// A sticky note placed on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Top-left corner in board-local pixels (x, y)
    pub position: (f32, f32),
    /// (width, height), never below the minimum note size
    pub size: (f32, f32),
    pub content: String,
    pub color: NoteColor,
    /// Stacking order; higher renders on top
    pub z_index: u64,
    pub created_at: DateTime<Utc>,
}

impl Note {
    #[inline]
    pub fn right(&self) -> f32 {
        self.position.0 + self.size.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.1 + self.size.1
    }

    #[inline]
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.position.0
            && point.0 <= self.right()
            && point.1 >= self.position.1
            && point.1 <= self.bottom()
    }

    /// Creation date as shown in the note header
    pub fn created_label(&self) -> String {
        self.created_at
            .with_timezone(&chrono::Local)
            .format("%-m/%-d/%Y")
            .to_string()
    }
}

/// Clamp a size to the minimum note dimensions.
#[inline]
pub fn clamp_note_size(size: (f32, f32)) -> (f32, f32) {
    (size.0.max(MIN_NOTE_WIDTH), size.1.max(MIN_NOTE_HEIGHT))
}

// ============================================================================
// Partial Updates
// ============================================================================

/// A partial set of note fields to merge into an existing note.
///
/// Absent fields are left untouched. Sizes are applied as given; callers are
/// responsible for clamping them first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteUpdate {
    pub position: Option<(f32, f32)>,
    pub size: Option<(f32, f32)>,
    pub content: Option<String>,
    pub color: Option<NoteColor>,
}

impl NoteUpdate {
    pub fn position(position: (f32, f32)) -> Self {
        Self { position: Some(position), ..Default::default() }
    }

    pub fn size(size: (f32, f32)) -> Self {
        Self { size: Some(size), ..Default::default() }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Default::default() }
    }

    pub fn color(color: NoteColor) -> Self {
        Self { color: Some(color), ..Default::default() }
    }

    pub fn with_position(mut self, position: (f32, f32)) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: (f32, f32)) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_color(mut self, color: NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.size.is_none() && self.content.is_none() && self.color.is_none()
    }

    /// Merge the present fields into `note`.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(position) = self.position {
            note.position = position;
        }
        if let Some(size) = self.size {
            note.size = size;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Size of the visible board area, in board-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let (w, h) = crate::constants::DEFAULT_WINDOW_SIZE;
        Self::new(w, h - crate::constants::HEADER_HEIGHT)
    }
}
