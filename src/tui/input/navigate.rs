use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::Filter;
use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor movement
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_ids().len().saturating_sub(1);
        }

        // New task
        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Insert,

        // Mutations on the task under the cursor
        KeyCode::Char(' ') | KeyCode::Char('x') => toggle_at_cursor(app),
        KeyCode::Char('d') | KeyCode::Delete => delete_at_cursor(app),
        KeyCode::Char('c') => clear_completed(app),

        // Filters
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Active),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),
        KeyCode::Tab => app.set_filter(app.filter.next()),

        KeyCode::Char('t') => app.toggle_theme(),

        KeyCode::Char('m') => enter_move_mode(app),

        // Search
        KeyCode::Char('/') => {
            app.search_input.clear();
            app.mode = Mode::Search;
        }
        KeyCode::Char('n') => search_next(app, 1),
        KeyCode::Char('N') => search_next(app, -1),

        KeyCode::Char('?') => app.show_help = true,

        // Clear the lingering search highlight
        KeyCode::Esc => app.last_search = None,

        _ => {}
    }
}

pub(super) fn move_cursor(app: &mut App, direction: i32) {
    let len = app.visible_ids().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let new = (app.cursor as i32 + direction).clamp(0, len as i32 - 1);
    app.cursor = new as usize;
}

pub(super) fn toggle_at_cursor(app: &mut App) {
    if let Some(id) = app.cursor_task_id()
        && app.store.toggle(id)
    {
        app.persist_tasks();
        // Under a non-All filter the row just left the view.
        app.clamp_cursor();
    }
}

pub(super) fn delete_at_cursor(app: &mut App) {
    if let Some(id) = app.cursor_task_id()
        && app.store.delete(id)
    {
        app.persist_tasks();
        app.clamp_cursor();
    }
}

pub(super) fn clear_completed(app: &mut App) {
    if app.store.clear_completed() > 0 {
        app.persist_tasks();
        app.clamp_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::{key, test_app};

    #[test]
    fn space_toggles_and_persists() {
        let mut app = test_app();
        // Cursor starts on the completed seed task.
        assert_eq!(app.cursor_task_id(), Some(1));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(!app.store.get(1).unwrap().completed);

        let persisted = crate::io::storage::load_tasks(app.kv.as_ref())
            .unwrap()
            .unwrap();
        assert!(!persisted[0].completed);
    }

    #[test]
    fn delete_under_completed_filter_leaves_placeholder_cursor() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.visible_ids(), vec![1]);
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(app.visible_ids().is_empty());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.store.len(), 5);
    }

    #[test]
    fn filter_keys_switch_and_reset_cursor() {
        let mut app = test_app();
        app.cursor = 3;
        handle_key(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.filter, Filter::Active);
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.filter, Filter::Completed);
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn clear_completed_keeps_actives() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.store.len(), 5);
        assert!(app.store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn help_overlay_swallows_keys_until_closed() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        let before = app.store.len();
        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.store.len(), before);
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = test_app();
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.cursor, 5);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor, 5);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 0);
    }
}
