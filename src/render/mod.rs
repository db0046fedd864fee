//! gpui front end for the board.
//!
//! `NotesView` owns a `NotesApp` and forwards raw mouse events to it after
//! converting window coordinates to board coordinates. Hit testing, gestures
//! and clicks all happen in the core; this layer only draws the result and
//! hosts the text input for the note being edited.

mod menu_bar;
mod note_card;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::input::{InputEvent, InputState};
use tracing::{debug, info};

use crate::app::NotesApp;
use crate::input::coords::CoordinateConverter;
use crate::profile_scope;
use crate::types::{NoteId, Viewport};

/// Text input bound to one note's content.
struct ContentEditor {
    note_id: NoteId,
    input: Entity<InputState>,
    _subscription: Subscription,
}

pub struct NotesView {
    app: NotesApp,
    editor: Option<ContentEditor>,
}

impl NotesView {
    pub fn new(app: NotesApp) -> Self {
        Self { app, editor: None }
    }

    pub fn app(&self) -> &NotesApp {
        &self.app
    }

    fn board_position(position: Point<Pixels>) -> (f32, f32) {
        CoordinateConverter::window_to_board((f32::from(position.x), f32::from(position.y)))
    }

    fn on_pointer_down(&mut self, event: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let target = self.app.pointer_down_at(Self::board_position(event.position));
        debug!(?target, "Pointer down");
        self.sync_editor(window, cx);
        cx.notify();
    }

    fn on_pointer_move(&mut self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.app.canvas.input_state.is_active() {
            return;
        }
        if self.app.pointer_move_at(Self::board_position(event.position)) {
            cx.notify();
        }
    }

    fn on_pointer_up(&mut self, event: &MouseUpEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.app.pointer_up_at(Self::board_position(event.position));
        // Deleting the edited note drops its focus
        self.sync_editor(window, cx);
        cx.notify();
    }

    fn create_note(&mut self, cx: &mut Context<Self>) {
        self.app.create_note();
        cx.notify();
    }

    /// Keep the hosted text input in step with the core's edit focus.
    fn sync_editor(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let editing = self.app.editing_note();
        if self.editor.as_ref().map(|e| e.note_id) == editing {
            return;
        }
        self.editor = None;

        let Some(note_id) = editing else {
            return;
        };
        let Some(note) = self.app.board.note(note_id) else {
            return;
        };

        let text = note.content.clone();
        let input = cx.new(|cx| InputState::new(window, cx).multi_line(true).default_value(text));
        let subscription = cx.subscribe(&input, move |this, input, event: &InputEvent, cx| match event {
            InputEvent::Change { .. } => {
                let text = input.read(cx).text().to_string();
                this.app.set_content(note_id, text);
                cx.notify();
            }
            InputEvent::Blur => {
                if this.app.editing_note() == Some(note_id) {
                    this.app.blur_content();
                }
                this.editor = None;
                cx.notify();
            }
            _ => {}
        });

        let focus = input.clone();
        window.defer(cx, move |window, cx| {
            focus.update(cx, |state, cx| state.focus(window, cx));
        });

        self.editor = Some(ContentEditor {
            note_id,
            input,
            _subscription: subscription,
        });
    }
}

impl Drop for NotesView {
    fn drop(&mut self) {
        self.app.teardown();

        let perf = &self.app.system.perf_monitor;
        info!(
            avg_frame_ms = format!("{:.2}", perf.average_frame_time()),
            fps = format!("{:.1}", perf.estimated_fps()),
            slow_frames_pct = format!("{:.1}", perf.slow_frame_percentage()),
            "Board closed"
        );
    }
}

/// Last element painted, so the frame covers layout and paint too.
fn frame_end_marker(view: Entity<NotesView>) -> impl IntoElement {
    canvas(
        |_, _, _| {},
        move |_, _, _, cx| {
            view.update(cx, |this, _| {
                this.app.system.perf_monitor.end_frame();
            });
        },
    )
    .absolute()
    .size_full()
}

impl Render for NotesView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        profile_scope!("render");
        self.app.system.perf_monitor.begin_frame();

        let size = window.viewport_size();
        let (width, height) =
            CoordinateConverter::board_size((f32::from(size.width), f32::from(size.height)));
        self.app.set_viewport(Viewport::new(width, height));

        let snapshot = self.app.render_snapshot();
        let editing_input = self
            .editor
            .as_ref()
            .map(|editor| (editor.note_id, editor.input.clone()));
        let bg = cx.theme().background;
        let muted_fg = cx.theme().muted_foreground;

        let board = div()
            .id("board")
            .relative()
            .flex_1()
            .w_full()
            .overflow_hidden()
            .bg(bg)
            .when(snapshot.notes.is_empty(), |d| {
                d.child(
                    div()
                        .size_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .text_color(muted_fg)
                        .child("No notes yet. Click \"New Note\" to add one."),
                )
            })
            .children(snapshot.notes.iter().map(|note| {
                let picker_open = snapshot.open_pickers.contains(&note.id);
                let input = editing_input
                    .as_ref()
                    .filter(|(id, _)| *id == note.id)
                    .map(|(_, input)| input);
                note_card::render_note(note, picker_open, input)
            }));

        let root = div()
            .id("notes-root")
            .size_full()
            .flex()
            .flex_col()
            .child(menu_bar::render_menu_bar(
                snapshot.notes.len(),
                cx.listener(|this, _, _, cx| this.create_note(cx)),
                cx,
            ))
            .child(board)
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_pointer_down))
            .on_mouse_move(cx.listener(Self::on_pointer_move))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_pointer_up))
            .child(frame_end_marker(cx.entity()));

        root
    }
}
