use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;

use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel search
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }

        // Execute search
        (_, KeyCode::Enter) => {
            if !app.search_input.is_empty() {
                app.last_search = Some(app.search_input.clone());
                execute_search(app, 0);
            }
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }

        (_, KeyCode::Backspace) => {
            app.search_input.pop();
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
        }

        _ => {}
    }
}

/// Advance search by `direction` (+1 = next, -1 = prev).
pub(super) fn search_next(app: &mut App, direction: i32) {
    execute_search(app, direction);
}

/// Jump the cursor to the next visible task matching the stored pattern.
/// `direction` is +1 (next), -1 (prev) or 0 (first at or after cursor).
fn execute_search(app: &mut App, direction: i32) {
    let pattern = match &app.last_search {
        Some(p) => p.clone(),
        None => return,
    };
    // Build case-insensitive regex; fall back to escaped literal on invalid regex
    let re = match Regex::new(&format!("(?i){}", pattern)) {
        Ok(r) => r,
        Err(_) => match Regex::new(&format!("(?i){}", regex::escape(&pattern))) {
            Ok(r) => r,
            Err(_) => return,
        },
    };

    let match_positions: Vec<usize> = app
        .store
        .filtered(app.filter)
        .iter()
        .enumerate()
        .filter(|(_, t)| re.is_match(&t.text))
        .map(|(i, _)| i)
        .collect();

    if let Some((idx, _wrapped)) = find_next_match_position(&match_positions, app.cursor, direction)
    {
        app.cursor = match_positions[idx];
    }
}

/// Given a sorted list of cursor positions where matches occur,
/// find the next one relative to `current_cursor` in the given direction.
/// Returns (index into positions, wrapped: bool) or None if empty.
/// direction: 0 = at or after cursor, +1 = strictly after, -1 = strictly before.
pub(super) fn find_next_match_position(
    positions: &[usize],
    current_cursor: usize,
    direction: i32,
) -> Option<(usize, bool)> {
    if positions.is_empty() {
        return None;
    }
    match direction {
        0 => {
            // Initial search: find first match at or after cursor, fallback to first
            if let Some(idx) = positions.iter().position(|&p| p >= current_cursor) {
                Some((idx, false))
            } else {
                Some((0, false))
            }
        }
        1 => {
            // Next: find first match strictly after cursor
            if let Some(idx) = positions.iter().position(|&p| p > current_cursor) {
                Some((idx, false))
            } else {
                Some((0, true)) // wrap to top
            }
        }
        -1 => {
            // Prev: find last match strictly before cursor
            if let Some(idx) = positions.iter().rposition(|&p| p < current_cursor) {
                Some((idx, false))
            } else {
                Some((positions.len() - 1, true)) // wrap to bottom
            }
        }
        _ => None,
    }
}
