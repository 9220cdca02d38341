//! Water page
//!
//! Today's glasses against the goal, and a chart of today's entries.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

use crate::logic::water::goal_ratio;
use crate::model::water::WaterEntry;
use crate::model::WaterModel;

const BLUE: Color = Color::Rgb(0x1e, 0x88, 0xe5);
const NAVY: Color = Color::Rgb(0x0d, 0x47, 0xa1);

/// Chart points for today's entries: x is the entry's position, y its amount
pub fn chart_points(entries: &[&WaterEntry]) -> Vec<(f64, f64)> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| (i as f64, entry.amount as f64))
        .collect()
}

/// First and last entry times for the x axis
fn x_labels(entries: &[&WaterEntry]) -> Vec<Line<'static>> {
    match (entries.first(), entries.last()) {
        (Some(first), Some(last)) if entries.len() > 1 => {
            vec![Line::from(first.time.clone()), Line::from(last.time.clone())]
        }
        (Some(only), _) => vec![Line::from(only.time.clone())],
        _ => Vec::new(),
    }
}

fn render_chart(f: &mut Frame, area: Rect, entries: &[&WaterEntry]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title(" Today's Intake Chart ");

    if entries.is_empty() {
        let empty = Paragraph::new("No data yet. Start drinking water!")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let points = chart_points(entries);
    let dataset = Dataset::default()
        .name("Water Intake (glasses)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(BLUE))
        .data(&points);

    let x_max = (entries.len().saturating_sub(1)).max(1) as f64;
    let chart = Chart::new(vec![dataset])
        .block(block.title_bottom(Line::from(" Daily Water Intake Progress ").centered()))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels(entries)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 2.0])
                .labels(vec!["0", "1", "2"]),
        );
    f.render_widget(chart, area);
}

pub fn render_water(f: &mut Frame, area: Rect, water: &WaterModel, today: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Progress
            Constraint::Min(6),    // Chart
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "💧 Water Tracker",
            Style::default().fg(NAVY).add_modifier(Modifier::BOLD),
        )),
        Line::from("Monitor your daily hydration and maintain a healthy habit."),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let glasses = water.total_on(today);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BLUE))
                .title(format!(" Glasses Today: {} / {} ", glasses, water.goal))
                .title_bottom(Line::from(" a: + Add Glass ").right_aligned()),
        )
        .gauge_style(Style::default().fg(BLUE))
        .ratio(goal_ratio(glasses, water.goal))
        .label(format!("{} / {}", glasses, water.goal));
    f.render_widget(gauge, chunks[1]);

    render_chart(f, chunks[2], &water.entries_on(today));
}
