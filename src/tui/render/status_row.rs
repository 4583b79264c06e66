use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): active count on the left,
/// mode-specific hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let mut spans = vec![Span::styled(
                format!(" {} items left", app.store.count_active()),
                Style::default().fg(app.theme.text).bg(bg),
            )];
            if let Some(ref pattern) = app.last_search {
                spans.push(Span::styled(
                    format!("  /{}", pattern),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            with_right_hint(app, spans, "a add  / search  ? help  q quit", width)
        }
        Mode::Insert => {
            let spans = vec![Span::styled(
                format!(" {} items left", app.store.count_active()),
                Style::default().fg(app.theme.text).bg(bg),
            )];
            with_right_hint(app, spans, "Enter add  Esc back", width)
        }
        Mode::Search => {
            // Search prompt: /pattern▌
            let spans = vec![
                Span::styled(
                    format!(" /{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.accent).bg(bg)),
            ];
            with_right_hint(app, spans, "Enter search  Esc cancel", width)
        }
        Mode::Move => {
            let spans = vec![Span::styled(
                " MOVE",
                Style::default().fg(app.theme.accent).bg(bg),
            )];
            with_right_hint(app, spans, "j/k move  Enter drop  Esc cancel", width)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Pad spans to the full width with a dim hint on the right edge.
fn with_right_hint<'a>(
    app: &App,
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    Line::from(spans)
}
