//! Pointer workflow tests: full press/move/release sequences over the board.

use crate::helpers::{TestAppBuilder, assert_note_count, drag, grab_point, layout, note, press};
use spooky_notes::app::NotesApp;
use spooky_notes::hit_testing::PointerTarget;
use spooky_notes::settings::Settings;

#[test]
fn test_welcome_board_workflow() {
    let mut app = NotesApp::new(Settings::default());
    assert_note_count(&app, 2);

    let ids: Vec<_> = app.board.notes().iter().map(|n| n.id).collect();
    let candy = ids[1];
    let grab = grab_point(&app, candy);
    drag(&mut app, grab, (grab.0 + 100.0, grab.1 + 50.0));

    assert_eq!(note(&app, candy).position, (400.0, 150.0));
    assert_eq!(app.board.topmost().map(|n| n.id), Some(candy));
}

#[test]
fn test_create_then_drag_each() {
    let (mut app, _) = TestAppBuilder::new().build();
    let ids: Vec<_> = (0..3).map(|_| app.create_note()).collect();
    assert_note_count(&app, 3);

    for (i, id) in ids.iter().enumerate() {
        let grab = grab_point(&app, *id);
        let to = (600.0, 100.0 + 200.0 * i as f32);
        drag(&mut app, grab, to);
        assert_eq!(app.board.topmost().map(|n| n.id), Some(*id));
    }

    // Every note was raised once after creation; last dragged is on top
    let order: Vec<_> = app.board.render_order().map(|n| n.id).collect();
    assert_eq!(order, ids);
}

#[test]
fn test_overlapping_drag_moves_only_topmost() {
    let (mut app, ids) = TestAppBuilder::new()
        .with_note((100.0, 100.0))
        .with_note((110.0, 105.0))
        .build();

    drag(&mut app, (120.0, 110.0), (420.0, 310.0));

    assert_eq!(note(&app, ids[0]).position, (100.0, 100.0));
    assert_eq!(note(&app, ids[1]).position, (410.0, 305.0));
}

#[test]
fn test_many_moves_follow_pointer() {
    let (mut app, ids) = TestAppBuilder::new().with_note((100.0, 100.0)).build();
    press(&mut app, (120.0, 110.0));

    for step in 1..=10 {
        let p = (120.0 + 10.0 * step as f32, 110.0 + 5.0 * step as f32);
        assert!(app.pointer_move_at(p));
        assert_eq!(note(&app, ids[0]).position, (p.0 - 20.0, p.1 - 10.0));
    }
    app.pointer_up_at((220.0, 160.0));
    assert!(app.canvas.input_state.is_idle());
}

#[test]
fn test_resize_then_move_same_note() {
    let (mut app, ids) = TestAppBuilder::new().with_note((100.0, 100.0)).build();
    let id = ids[0];

    let handle = layout(&app, id).resize_handle;
    let start = (handle.x + 8.0, handle.y + 8.0);
    drag(&mut app, start, (start.0 + 100.0, start.1 + 40.0));
    assert_eq!(note(&app, id).size, (300.0, 200.0));
    assert_eq!(note(&app, id).position, (100.0, 100.0));

    drag(&mut app, (110.0, 110.0), (210.0, 210.0));
    assert_eq!(note(&app, id).position, (200.0, 200.0));
    assert_eq!(note(&app, id).size, (300.0, 200.0));
}

#[test]
fn test_board_press_starts_nothing() {
    let (mut app, _) = TestAppBuilder::new().with_note((100.0, 100.0)).build();
    let before = app.board.notes().to_vec();

    assert_eq!(press(&mut app, (900.0, 600.0)), PointerTarget::Board);
    assert!(!app.pointer_move_at((950.0, 650.0)));
    app.pointer_up_at((950.0, 650.0));

    assert_eq!(app.board.notes(), before.as_slice());
}

#[test]
fn test_content_press_does_not_move() {
    let (mut app, ids) = TestAppBuilder::new().with_note((100.0, 100.0)).build();
    let content = layout(&app, ids[0]).content;
    let p = (content.x + 20.0, content.y + 20.0);

    assert_eq!(press(&mut app, p), PointerTarget::Content(ids[0]));
    assert!(app.canvas.input_state.is_idle());
    assert!(!app.pointer_move_at((p.0 + 100.0, p.1)));
    assert_eq!(note(&app, ids[0]).position, (100.0, 100.0));
}
