use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::Page;

pub const TEAL: Color = Color::Rgb(0x00, 0x79, 0x6b);

/// Tab titles in navigation order, numbered for the digit hotkeys
pub fn tab_titles() -> Vec<String> {
    Page::ALL
        .iter()
        .map(|page| format!("{} {}", page.index() + 1, page.as_str()))
        .collect()
}

/// Render the top navigation bar: app name on the left, page tabs on the right
pub fn render_nav_bar(f: &mut Frame, area: Rect, app_name: &str, active: Page) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEAL));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let titles = tab_titles();
    // Tabs draw " title " plus a one-column divider between entries
    let tabs_width: u16 = titles.iter().map(|t| t.width() as u16 + 3).sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(tabs_width)])
        .split(inner);

    let name = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app_name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(name, chunks[0]);

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(TEAL)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, chunks[1]);
}
