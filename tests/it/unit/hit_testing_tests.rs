//! Hit testing tests against a live app: stacking, chrome and pickers.

use crate::helpers::{TestAppBuilder, center, layout};
use spooky_notes::hit_testing::{NoteControl, PointerTarget};
use spooky_notes::types::NoteColor;

#[test]
fn test_empty_board_hits_board() {
    let (mut app, _) = TestAppBuilder::new().build();
    assert_eq!(app.hit_test((50.0, 50.0)), PointerTarget::Board);
}

#[test]
fn test_chrome_targets() {
    let (mut app, ids) = TestAppBuilder::new().with_note((100.0, 100.0)).build();
    let id = ids[0];
    let l = layout(&app, id);

    assert_eq!(
        app.hit_test(center(l.delete_button)),
        PointerTarget::Control(id, NoteControl::DeleteButton)
    );
    assert_eq!(
        app.hit_test(center(l.color_button)),
        PointerTarget::Control(id, NoteControl::ColorButton)
    );
    assert_eq!(app.hit_test(center(l.resize_handle)), PointerTarget::ResizeHandle(id));
    assert_eq!(app.hit_test(center(l.content)), PointerTarget::Content(id));
    assert_eq!(app.hit_test((105.0, 105.0)), PointerTarget::NoteSurface(id));
}

#[test]
fn test_topmost_note_wins_overlap() {
    let (mut app, ids) = TestAppBuilder::new()
        .with_note((100.0, 100.0))
        .with_note((150.0, 110.0))
        .build();
    let overlap = (160.0, 115.0);

    assert_eq!(app.hit_test(overlap), PointerTarget::NoteSurface(ids[1]));

    app.board.raise_note(ids[0]);
    assert_eq!(app.hit_test(overlap).note(), Some(ids[0]));
}

#[test]
fn test_hits_follow_moved_notes() {
    let (mut app, ids) = TestAppBuilder::new().with_note((100.0, 100.0)).build();
    assert_eq!(app.hit_test((105.0, 105.0)), PointerTarget::NoteSurface(ids[0]));

    crate::helpers::drag(&mut app, (105.0, 105.0), (605.0, 305.0));

    assert_eq!(app.hit_test((105.0, 105.0)), PointerTarget::Board);
    assert_eq!(app.hit_test((605.0, 305.0)), PointerTarget::NoteSurface(ids[0]));
}

#[test]
fn test_open_picker_covers_note_content() {
    let (mut app, ids) = TestAppBuilder::new().with_note((300.0, 100.0)).build();
    let id = ids[0];
    let swatch = center(layout(&app, id).swatch(NoteColor::Orange));

    assert_eq!(app.hit_test(swatch), PointerTarget::Content(id));
    app.toggle_color_picker(id);
    assert_eq!(app.hit_test(swatch), PointerTarget::Swatch(id, NoteColor::Orange));
}

#[test]
fn test_picker_gap_is_a_control() {
    let (mut app, ids) = TestAppBuilder::new().with_note((300.0, 100.0)).build();
    let id = ids[0];
    let picker = layout(&app, id).picker;
    // The picker hangs off the left edge of the note
    let gap = (picker.x + 2.0, picker.y + 2.0);
    assert!(gap.0 < 300.0);
    assert_eq!(app.hit_test(gap), PointerTarget::Board);

    app.toggle_color_picker(id);
    assert_eq!(
        app.hit_test(gap),
        PointerTarget::Control(id, NoteControl::Picker)
    );
}

#[test]
fn test_every_swatch_resolves_to_its_color() {
    let (mut app, ids) = TestAppBuilder::new().with_note((300.0, 100.0)).build();
    let id = ids[0];
    app.toggle_color_picker(id);
    let l = layout(&app, id);

    for color in NoteColor::ALL {
        assert_eq!(app.hit_test(center(l.swatch(color))), PointerTarget::Swatch(id, color));
    }
}
