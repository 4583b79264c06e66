use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Filter;
use crate::tui::app::App;

/// Render the header: title + filter tabs + theme indicator, with a
/// separator line below.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Render the tab row and return the column positions of each separator character.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    // Title
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25A3} tick",
        Style::default()
            .fg(app.theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" ", bg_style));
    sep_cols.push(current_width(&spans));
    spans.push(sep.clone());

    // One tab per filter, current one highlighted
    for (i, filter) in [Filter::All, Filter::Active, Filter::Completed]
        .into_iter()
        .enumerate()
    {
        let label = match filter {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        };
        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, label),
            tab_style(app, app.filter == filter),
        ));
        sep_cols.push(current_width(&spans));
        spans.push(sep.clone());
    }

    // Right-aligned theme indicator
    let glyph = if app.dark_theme {
        "\u{263E}" // moon
    } else {
        "\u{2600}" // sun
    };
    let width = area.width as usize;
    let used = current_width(&spans) + 2;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), bg_style));
    }
    spans.push(Span::styled(
        glyph,
        Style::default().fg(app.theme.accent).bg(bg),
    ));

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let mut line = String::with_capacity(width * 3);
    for col in 0..width {
        if sep_cols.contains(&col) {
            line.push('\u{2534}');
        } else {
            line.push('\u{2500}');
        }
    }
    let sep_widget =
        Paragraph::new(line).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(sep_widget, area);
}

fn current_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.chars().count()).sum()
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
