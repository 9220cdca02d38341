use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::logic::formatting::footer_text;

/// Render the copyright line under the dashboard
pub fn render_footer(f: &mut Frame, area: Rect, app_name: &str, app_version: &str) {
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(footer_text(year, app_name, app_version))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
