use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::*;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }

        // Submit. Whitespace-only input is ignored; the buffer stays so
        // the user can fix it rather than retype.
        (_, KeyCode::Enter) => {
            let text = app.input.clone();
            if app.store.add(&text).is_some() {
                app.persist_tasks();
                app.input.clear();
                app.input_cursor = 0;
                // New tasks prepend, so show the top of the list.
                app.cursor = 0;
                app.scroll_offset = 0;
            }
        }

        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }

        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input.len(),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}
