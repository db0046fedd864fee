//! Snapshot tests using the insta crate.
//!
//! The render snapshot is what a presentation layer draws from, so its JSON
//! shape is pinned here. Creation timestamps are redacted.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestAppBuilder, press};
use spooky_notes::settings::Settings;
use spooky_notes::types::NoteColor;

#[test]
fn snapshot_empty_app() {
    let (app, _) = TestAppBuilder::new().build();

    insta::assert_json_snapshot!(app.render_snapshot(), @r#"
    {
      "notes": [],
      "gesture": {
        "kind": "idle"
      },
      "open_pickers": [],
      "editing": null
    }
    "#);
}

#[test]
fn snapshot_moving_with_open_picker() {
    let (mut app, ids) = TestAppBuilder::new()
        .with_sized_note((40.0, 60.0), (220.0, 180.0))
        .with_text("hello", NoteColor::Orange)
        .with_note((300.0, 100.0))
        .with_text("", NoteColor::Purple)
        .build();

    app.toggle_color_picker(ids[1]);
    press(&mut app, (50.0, 70.0));

    insta::assert_json_snapshot!(app.render_snapshot(), {
        ".notes[].created_at" => "[created_at]"
    }, @r#"
    {
      "notes": [
        {
          "id": 2,
          "position": [
            300.0,
            100.0
          ],
          "size": [
            200.0,
            160.0
          ],
          "content": "",
          "color": "Purple",
          "z_index": 2,
          "created_at": "[created_at]"
        },
        {
          "id": 1,
          "position": [
            40.0,
            60.0
          ],
          "size": [
            220.0,
            180.0
          ],
          "content": "hello",
          "color": "Orange",
          "z_index": 3,
          "created_at": "[created_at]"
        }
      ],
      "gesture": {
        "kind": "moving",
        "note_id": 1,
        "scope": "Board"
      },
      "open_pickers": [
        2
      ],
      "editing": null
    }
    "#);
}

#[test]
fn snapshot_resizing_gesture() {
    let (mut app, _) = TestAppBuilder::new()
        .with_sized_note((100.0, 140.0), (200.0, 160.0))
        .build();
    press(&mut app, (296.0, 296.0));

    insta::assert_json_snapshot!(app.render_snapshot().gesture, @r#"
    {
      "kind": "resizing",
      "note_id": 1,
      "scope": "Handle"
    }
    "#);
}

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
    {
      "drag_margin": [
        100.0,
        50.0
      ],
      "note_origin": [
        100.0,
        100.0
      ],
      "stagger_step": 30.0,
      "stagger_slots": 5,
      "seed_welcome_notes": true
    }
    "#);
}
