use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top navigation bar
    pub nav_area: Rect,
    /// Page body
    pub content_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
}

/// Calculate the screen layout shared by every page
pub fn calculate_layout(terminal_size: Rect, legend_height: u16) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Navigation bar (border, tabs, border)
            Constraint::Min(3),                // Page body
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
        ])
        .split(terminal_size);

    LayoutInfo {
        nav_area: main_chunks[0],
        content_area: main_chunks[1],
        legend_area: main_chunks[2],
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Split `area` into `count` equal columns
pub fn equal_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(area)
        .to_vec()
}
