//! Spatial Index Module
//!
//! R-tree over note bounding boxes, used to find hit candidates for a
//! pointer position without scanning every note. The hit tester rebuilds it
//! whenever the board revision moves.

use rstar::{AABB, RTree, RTreeObject};

use crate::types::{Note, NoteId};

/// A note's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub note_id: NoteId,
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl SpatialEntry {
    fn of(note: &Note) -> Self {
        let (x, y) = note.position;
        let (w, h) = note.size;
        Self {
            note_id: note.id,
            min: [x, y],
            max: [x + w, y + h],
        }
    }

    #[inline]
    fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min[0] && x <= self.max[0] && y >= self.min[1] && y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

/// Bulk-loaded R-tree of note bounds.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole tree with the bounds of `notes`.
    pub fn rebuild<'a, I>(&mut self, notes: I)
    where
        I: IntoIterator<Item = &'a Note>,
    {
        let entries: Vec<SpatialEntry> = notes.into_iter().map(SpatialEntry::of).collect();
        self.tree = RTree::bulk_load(entries);
    }

    /// All notes whose bounds contain the given board-local point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NoteId> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|entry| entry.contains(x, y))
            .map(|entry| entry.note_id)
            .collect()
    }
}
