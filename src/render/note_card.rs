//! Note card rendering.
//!
//! Every rect comes from `NoteLayout`, the same geometry the hit tester
//! uses, so what is drawn is what gets clicked. Cards carry no mouse
//! listeners of their own apart from the hosted text input.

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::input::{Input, InputState};

use crate::hit_testing::{NoteLayout, Rect};
use crate::types::{Note, NoteColor};

/// Place a board-space rect relative to `origin`.
fn place(rect: Rect, origin: (f32, f32)) -> Div {
    div()
        .absolute()
        .left(px(rect.x - origin.0))
        .top(px(rect.y - origin.1))
        .w(px(rect.w))
        .h(px(rect.h))
}

fn header_button(rect: Rect, origin: (f32, f32), label: &'static str, fg: Rgba) -> Div {
    place(rect, origin)
        .rounded(px(4.0))
        .flex()
        .items_center()
        .justify_center()
        .cursor_pointer()
        .text_size(px(13.0))
        .text_color(fg)
        .child(label)
}

pub fn render_note(note: &Note, picker_open: bool, input: Option<&Entity<InputState>>) -> AnyElement {
    let layout = NoteLayout::of(note);
    let theme = note.color.theme();
    let origin = note.position;
    let text_color = rgb(theme.text);

    let content = place(layout.content, origin)
        .px(px(8.0))
        .py(px(6.0))
        .overflow_hidden()
        .text_size(px(14.0))
        .text_color(text_color)
        .map(|d| match input {
            Some(input) => d.child(Input::new(input).appearance(false).size_full()),
            None => d.children(note.content.lines().map(|line| {
                div().child(if line.is_empty() { " ".to_string() } else { line.to_string() })
            })),
        });

    let card = div()
        .id(ElementId::Name(format!("note-{}", note.id.0).into()))
        .absolute()
        .left(px(note.position.0))
        .top(px(note.position.1))
        .w(px(note.size.0))
        .h(px(note.size.1))
        .bg(rgb(theme.body))
        .border_2()
        .border_color(rgb(theme.header))
        .rounded(px(6.0))
        .shadow_md()
        .child(
            place(layout.header, origin)
                .bg(rgb(theme.header))
                .px(px(8.0))
                .flex()
                .items_center()
                .text_size(px(11.0))
                .text_color(text_color)
                .child(note.created_label()),
        )
        .child(header_button(layout.color_button, origin, "◐", text_color))
        .child(header_button(layout.delete_button, origin, "×", text_color))
        .child(content)
        .child(
            place(layout.resize_handle, origin)
                .cursor(CursorStyle::ResizeUpLeftDownRight)
                .border_r_2()
                .border_b_2()
                .border_color(rgb(theme.header)),
        )
        .when(picker_open, |d| d.child(render_picker(&layout, origin)));

    card.into_any_element()
}

fn render_picker(layout: &NoteLayout, origin: (f32, f32)) -> Div {
    let picker_origin = (layout.picker.x, layout.picker.y);
    place(layout.picker, origin)
        .bg(rgb(0x18181b))
        .rounded(px(6.0))
        .shadow_lg()
        .children(NoteColor::ALL.into_iter().map(|color| {
            place(layout.swatch(color), picker_origin)
                .rounded_full()
                .bg(rgb(color.theme().body))
                .border_1()
                .border_color(rgb(0xffffff))
                .cursor_pointer()
        }))
}
