use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, MoveState};

use super::*;

/// Enter MOVE mode for the task under the cursor. Records where the task
/// started so a cancel can put it back.
pub(super) fn enter_move_mode(app: &mut App) {
    if let Some(id) = app.cursor_task_id()
        && let Some(index) = app.store.position(id)
    {
        app.move_state = Some(MoveState {
            task_id: id,
            original_index: index,
        });
        app.mode = Mode::Move;
    }
}

/// MOVE mode is the drag gesture: j/k drops the task past its visible
/// neighbor, Enter confirms, Esc restores the original position. Both
/// exits clear the move state unconditionally.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm: the reorders already happened and were persisted.
        KeyCode::Enter | KeyCode::Char('m') => {
            app.move_state = None;
            app.mode = Mode::Navigate;
        }

        // Cancel: restore original position
        KeyCode::Esc => {
            if let Some(ms) = app.move_state.take()
                && app.store.move_to_index(ms.task_id, ms.original_index)
            {
                app.persist_tasks();
                follow_task(app, ms.task_id);
            }
            app.mode = Mode::Navigate;
        }

        KeyCode::Down | KeyCode::Char('j') => move_step(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_step(app, -1),

        _ => {}
    }
}

/// Reorder the moving task past its visible neighbor in the given direction.
pub(super) fn move_step(app: &mut App, direction: i32) {
    let Some(ms) = &app.move_state else {
        return;
    };
    let id = ms.task_id;

    let visible = app.visible_ids();
    let Some(pos) = visible.iter().position(|&v| v == id) else {
        return;
    };
    let target_pos = pos as i32 + direction;
    if target_pos < 0 || target_pos as usize >= visible.len() {
        return;
    }
    let target_id = visible[target_pos as usize];

    if app.store.reorder(id, target_id) {
        app.persist_tasks();
        app.cursor = target_pos as usize;
    }
}

/// Point the cursor at the given task's row in the current view.
fn follow_task(app: &mut App, id: u64) {
    if let Some(pos) = app.visible_ids().iter().position(|&v| v == id) {
        app.cursor = pos;
    } else {
        app.clamp_cursor();
    }
}
