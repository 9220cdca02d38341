use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::Page;

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(page: Page, search_mode: bool, has_search_query: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Typing into the search box: only its own keys do anything
    if page == Page::Workouts && search_mode {
        hotkey_spans.extend(key("Enter", ":Accept  "));
        hotkey_spans.extend(key("Esc", ":Exit Search  "));
        hotkey_spans.extend(key("↑/↓", ":Select"));
        return hotkey_spans;
    }

    hotkey_spans.extend(key("1-4", ":Page  "));
    hotkey_spans.extend(key("Tab/←/→", ":Switch  "));

    match page {
        Page::Workouts => {
            hotkey_spans.extend(key("↑/↓", ":Select  "));
            if has_search_query {
                hotkey_spans.extend(key("Esc", ":Clear Search  "));
            } else {
                hotkey_spans.extend(key("/", ":Search  "));
            }
            hotkey_spans.extend(key("r", ":Reload  "));
        }
        Page::Water => {
            hotkey_spans.extend(key("a/+", ":Add Glass  "));
        }
        Page::Dashboard | Page::Profile => {}
    }

    // Quit - always available
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(page: Page, search_mode: bool, has_search_query: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(page, search_mode, has_search_query));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, page: Page, search_mode: bool, has_search_query: bool) {
    f.render_widget(build_legend_paragraph(page, search_mode, has_search_query), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    page: Page,
    search_mode: bool,
    has_search_query: bool,
) -> u16 {
    // Count lines without the block; borders are added below
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(
        page,
        search_mode,
        has_search_query,
    ))])
    .wrap(ratatui::widgets::Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    (line_count as u16).saturating_add(2).max(3)
}
