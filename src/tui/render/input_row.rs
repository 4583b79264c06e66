use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the new-task input row.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let prompt = Span::styled(" \u{203A} ", Style::default().fg(app.theme.accent).bg(bg));

    let line = if app.mode == Mode::Insert {
        // Text split at the cursor with a block cursor between the halves.
        let before = &app.input[..app.input_cursor];
        let after = &app.input[app.input_cursor..];
        Line::from(vec![
            prompt,
            Span::styled(
                before.to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.accent).bg(bg)),
            Span::styled(
                after.to_string(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
        ])
    } else if !app.input.is_empty() {
        // A draft left behind by Esc stays visible but dimmed.
        Line::from(vec![
            prompt,
            Span::styled(
                app.input.clone(),
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(
                "press a to add a todo",
                Style::default().fg(app.theme.dim).bg(bg),
            ),
        ])
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
