//! Menu bar above the board.

use gpui::*;
use gpui_component::ActiveTheme as _;

use super::NotesView;
use crate::constants::HEADER_HEIGHT;

pub fn render_menu_bar(
    note_count: usize,
    on_new_note: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    cx: &Context<NotesView>,
) -> Stateful<Div> {
    let border = cx.theme().border;
    let fg = cx.theme().foreground;
    let muted_fg = cx.theme().muted_foreground;
    let primary = cx.theme().primary;
    let primary_fg = cx.theme().primary_foreground;

    let count_label = match note_count {
        1 => "1 note".to_string(),
        n => format!("{n} notes"),
    };

    div()
        .id("menu-bar")
        .h(px(HEADER_HEIGHT))
        .w_full()
        .flex()
        .flex_row()
        .items_center()
        .justify_between()
        .px(px(16.0))
        .border_b_1()
        .border_color(border)
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(FontWeight::BOLD)
                .text_color(fg)
                .child("Spooky Notes"),
        )
        .child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap(px(12.0))
                .child(div().text_size(px(13.0)).text_color(muted_fg).child(count_label))
                .child(
                    div()
                        .id("new-note-btn")
                        .h(px(30.0))
                        .px(px(12.0))
                        .rounded(px(6.0))
                        .bg(primary)
                        .cursor_pointer()
                        .flex()
                        .items_center()
                        .hover(|s| s.opacity(0.85))
                        .on_mouse_down(MouseButton::Left, |_, _, cx| {
                            cx.stop_propagation();
                        })
                        .on_click(on_new_note)
                        .child(
                            div()
                                .text_size(px(13.0))
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(primary_fg)
                                .child("+ New Note"),
                        ),
                ),
        )
}
