use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Row};
use crate::util::unicode::truncate_to_width;

use super::push_highlighted_spans;

/// Render the task list content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.rows();
    let bg = app.theme.background;

    // A lone placeholder renders as a centered message, not a task row.
    if let [Row::Placeholder { message }] = rows.as_slice() {
        let placeholder = Paragraph::new(*message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(placeholder, area);
        return;
    }

    // Keep the cursor visible
    let visible_height = area.height as usize;
    let cursor = app.cursor.min(rows.len().saturating_sub(1));
    app.cursor = cursor;
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if visible_height > 0 && cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor.saturating_sub(visible_height - 1);
    }

    let search_re = app.active_search_re();
    let moving_id = app.move_state.as_ref().map(|ms| ms.task_id);
    let end = rows.len().min(app.scroll_offset + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (row, idx) in rows[app.scroll_offset..end].iter().zip(app.scroll_offset..) {
        let Row::Task {
            id,
            text,
            completed,
        } = row
        else {
            continue;
        };

        let is_cursor = idx == cursor && app.mode != Mode::Insert;
        let is_moving = moving_id == Some(*id);
        let row_bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.surface
        };

        let checkbox_style = if *completed {
            Style::default().fg(app.theme.accent).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        let mut text_style = if *completed {
            Style::default()
                .fg(app.theme.text_done)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if is_moving {
            text_style = Style::default()
                .fg(app.theme.accent)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD);
        }

        let marker = if is_moving { "\u{2195}" } else { " " };
        let checkbox = if *completed { "[x] " } else { "[ ] " };

        let mut spans = vec![
            Span::styled(marker.to_string(), checkbox_style),
            Span::styled(checkbox.to_string(), checkbox_style),
        ];
        let text_budget = (area.width as usize).saturating_sub(6);
        push_highlighted_spans(
            &mut spans,
            &truncate_to_width(text, text_budget),
            text_style,
            Style::default()
                .fg(app.theme.search_match_fg)
                .bg(app.theme.search_match_bg),
            search_re.as_ref(),
        );

        // Pad every row so the card background spans the full width.
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if used < area.width as usize {
            spans.push(Span::styled(
                " ".repeat(area.width as usize - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let list = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(list, area);
}
