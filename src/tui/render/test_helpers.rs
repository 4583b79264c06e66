use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::MemStore;
use crate::model::config::AppConfig;
use crate::store::Store;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// An App over the seed list and an in-memory key-value store.
pub fn test_app() -> App {
    App::new(
        Store::seeded(),
        Box::new(MemStore::new()),
        std::env::temp_dir(),
        AppConfig::default(),
        false,
    )
}

/// A plain key press with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Filter;
    use crate::tui::render;

    #[test]
    fn full_render_shows_tabs_count_and_tasks() {
        let mut app = test_app();
        let text = render_to_string(TERM_W, TERM_H, |frame, _| {
            render::render(frame, &mut app);
        });

        assert!(text.contains("tick"));
        assert!(text.contains("1:All"));
        assert!(text.contains("2:Active"));
        assert!(text.contains("3:Completed"));
        assert!(text.contains("[x] Complete online JavaScript course"));
        assert!(text.contains("[ ] Jog around the park 3x"));
        assert!(text.contains("5 items left"));
    }

    #[test]
    fn empty_completed_view_shows_placeholder() {
        let mut app = test_app();
        app.store.delete(1);
        app.set_filter(Filter::Completed);
        let text = render_to_string(TERM_W, TERM_H, |frame, _| {
            render::render(frame, &mut app);
        });
        assert!(text.contains("No completed todos"));
        assert!(!text.contains("[ ]"));
    }

    #[test]
    fn help_overlay_renders_on_top() {
        let mut app = test_app();
        app.show_help = true;
        let text = render_to_string(TERM_W, TERM_H, |frame, _| {
            render::render(frame, &mut app);
        });
        assert!(text.contains("Key Bindings"));
        assert!(text.contains("Clear completed"));
    }

    #[test]
    fn completed_rows_keep_checkbox_glyph() {
        let mut app = test_app();
        app.set_filter(Filter::Completed);
        let text = render_to_string(TERM_W, TERM_H, |frame, _| {
            render::render(frame, &mut app);
        });
        assert!(text.contains("[x] Complete online JavaScript course"));
    }
}
