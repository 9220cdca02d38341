//! Search Input UI
//!
//! Renders the workout search box with query, match count, and cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of workouts matching the query
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool, match_count: usize) {
    let title = if active {
        format!(" Search ({} matches) - Esc to cancel ", match_count)
    } else if !query.is_empty() {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        " Search (/) ".to_string()
    };

    let border_color = if active {
        Color::Green
    } else {
        Color::Gray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![Span::raw(query), Span::styled("█", cursor_style)])
    } else if query.is_empty() {
        Line::from(Span::styled(
            "Search workouts...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(query, Style::default().fg(Color::Gray)))
    };

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}
