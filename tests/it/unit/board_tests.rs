//! Board store tests: creation, ordering, merge updates and deletion.

use rand::SeedableRng;
use rand::rngs::StdRng;
use spooky_notes::board::{Board, Placement};
use spooky_notes::types::{NoteColor, NoteId, NoteUpdate};

#[test]
fn test_three_creates_have_increasing_z_and_distinct_ids() {
    let mut board = Board::new();
    let ids: Vec<NoteId> = (0..3).map(|_| board.create_note()).collect();

    assert_eq!(board.len(), 3);
    assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);

    let z: Vec<u64> = board.notes().iter().map(|n| n.z_index).collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]), "z not increasing: {z:?}");
}

#[test]
fn test_new_note_takes_current_counter() {
    let mut board = Board::new();
    for _ in 0..5 {
        let expected = board.next_z();
        let id = board.create_note();
        assert_eq!(board.note(id).map(|n| n.z_index), Some(expected));
        assert_eq!(board.next_z(), expected + 1);
    }
}

#[test]
fn test_new_note_defaults() {
    let mut board = Board::new();
    let id = board.create_note_with_rng(&mut StdRng::seed_from_u64(7));
    let note = board.note(id).expect("created");

    assert_eq!(note.position, (100.0, 100.0));
    assert_eq!(note.size, (200.0, 160.0));
    assert!(note.content.is_empty());
    assert!(NoteColor::ALL.contains(&note.color));
}

#[test]
fn test_seeded_rng_picks_same_color() {
    let mut a = Board::new();
    let mut b = Board::new();
    let id_a = a.create_note_with_rng(&mut StdRng::seed_from_u64(42));
    let id_b = b.create_note_with_rng(&mut StdRng::seed_from_u64(42));

    assert_eq!(a.note(id_a).map(|n| n.color), b.note(id_b).map(|n| n.color));
}

#[test]
fn test_placement_staggers_and_wraps() {
    let mut board = Board::with_placement(Placement {
        origin: (10.0, 20.0),
        step: 30.0,
        slots: 3,
    });
    let positions: Vec<(f32, f32)> = (0..4)
        .map(|_| {
            let id = board.create_note();
            board.note(id).map(|n| n.position).unwrap_or_default()
        })
        .collect();

    assert_eq!(
        positions,
        vec![(10.0, 20.0), (40.0, 50.0), (70.0, 80.0), (10.0, 20.0)]
    );
}

#[test]
fn test_update_merges_only_given_fields() {
    let mut board = Board::new();
    let id = board.create_note();
    let before = board.note(id).cloned().expect("created");

    assert!(board.update_note(id, NoteUpdate::content("boo")));
    let after = board.note(id).expect("still there");

    assert_eq!(after.content, "boo");
    assert_eq!(after.position, before.position);
    assert_eq!(after.size, before.size);
    assert_eq!(after.color, before.color);
    assert_eq!(after.z_index, before.z_index);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_update_missing_note_is_noop() {
    let mut board = Board::new();
    board.create_note();
    let before = board.notes().to_vec();

    assert!(!board.update_note(NoteId(999), NoteUpdate::position((5.0, 5.0))));
    assert_eq!(board.notes(), before.as_slice());
}

#[test]
fn test_delete_leaves_others_untouched() {
    let mut board = Board::new();
    let a = board.create_note();
    let b = board.create_note();
    let c = board.create_note();
    let others_before: Vec<_> = board
        .notes()
        .iter()
        .filter(|n| n.id != b)
        .cloned()
        .collect();

    assert!(board.delete_note(b));
    assert_eq!(board.len(), 2);
    assert_eq!(board.notes(), others_before.as_slice());
    assert!(board.contains(a) && board.contains(c));
}

#[test]
fn test_delete_missing_note_is_noop() {
    let mut board = Board::new();
    board.create_note();
    assert!(!board.delete_note(NoteId(42)));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_ids_never_reused_after_delete() {
    let mut board = Board::new();
    let first = board.create_note();
    let second = board.create_note();
    board.delete_note(second);
    board.delete_note(first);

    let third = board.create_note();
    assert!(third != first && third != second);
}

#[test]
fn test_raise_gives_strict_max() {
    let mut board = Board::new();
    let a = board.create_note();
    let b = board.create_note();

    assert!(board.raise_note(a));
    let za = board.note(a).map(|n| n.z_index).unwrap_or_default();
    let zb = board.note(b).map(|n| n.z_index).unwrap_or_default();
    assert_eq!(za, 3);
    assert_eq!(zb, 2);
    assert_eq!(board.topmost().map(|n| n.id), Some(a));
}

#[test]
fn test_raise_missing_keeps_counter() {
    let mut board = Board::new();
    board.create_note();
    let next = board.next_z();

    assert!(!board.raise_note(NoteId(77)));
    assert_eq!(board.next_z(), next);
}

#[test]
fn test_render_order_is_ascending_z() {
    let mut board = Board::new();
    let a = board.create_note();
    let b = board.create_note();
    let c = board.create_note();
    board.raise_note(a);
    board.raise_note(b);

    let order: Vec<NoteId> = board.render_order().map(|n| n.id).collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn test_welcome_board() {
    let board = Board::with_welcome_notes(Placement::default());
    assert_eq!(board.len(), 2);
    assert_eq!(board.next_z(), 3);

    let notes = board.notes();
    assert_eq!(notes[0].color, NoteColor::Orange);
    assert_eq!(notes[0].position, (40.0, 60.0));
    assert_eq!(notes[1].color, NoteColor::Purple);
    assert!(notes[1].created_at < notes[0].created_at);
}
