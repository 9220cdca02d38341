//! Workouts page
//!
//! Search box on top, matching workouts on the left, the selected workout's
//! card and report on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::{dashboard::GREEN, layout::centered_rect, search};
use crate::api::Exercise;
use crate::logic::{search::empty_message, workout};
use crate::model::{LoadState, WorkoutsModel};

fn render_message(f: &mut Frame, area: Rect, message: &str, color: Color) {
    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(text, centered_rect(area.width.saturating_sub(4), 3, area));
}

fn label_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value),
    ])
}

/// Lines of a workout card, top to bottom
pub fn workout_card_lines(workout: &Exercise, bar_width: usize) -> Vec<Line<'static>> {
    let difficulty = workout::difficulty_label(workout.difficulty);
    let slices = workout::muscle_slices(workout);

    let mut lines = vec![
        label_line("Category", workout::category_label(workout).to_string()),
        label_line("Difficulty", difficulty.to_string()),
        label_line("Equipment", workout::equipment_label(workout)),
        Line::from(""),
        Line::from(Span::styled(
            "Workout Report",
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        )),
    ];

    if slices.is_empty() {
        lines.push(Line::from(Span::styled(
            "No muscle data",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        // Equal-weight breakdown as one bar split into coloured segments
        let segment = (bar_width / slices.len()).max(1);
        let bar: Vec<Span> = slices
            .iter()
            .map(|s| {
                let (r, g, b) = s.color;
                Span::styled("█".repeat(segment), Style::default().fg(Color::Rgb(r, g, b)))
            })
            .collect();
        lines.push(Line::from(bar));

        for slice in &slices {
            let (r, g, b) = slice.color;
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(Color::Rgb(r, g, b))),
                Span::raw(format!("{} ({})", slice.name, slice.value)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(label_line("Total muscles targeted", slices.len().to_string()));
    lines.push(label_line("Primary muscles", workout::primary_muscles(&slices)));
    lines.push(label_line("Estimated duration", workout::ESTIMATED_DURATION.to_string()));
    lines.push(label_line("Calories burned", workout::ESTIMATED_CALORIES.to_string()));
    lines.push(label_line("Difficulty level", difficulty.to_string()));

    lines
}

fn render_list(f: &mut Frame, area: Rect, filtered: &[&Exercise], selected: Option<usize>, source: &str) {
    let items: Vec<ListItem> = filtered
        .iter()
        .map(|w| ListItem::new(workout::display_name(w)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GREEN))
                .title(format!(" Workouts ({}, {}) ", filtered.len(), source)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(GREEN)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail(f: &mut Frame, area: Rect, workout: &Exercise) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GREEN))
        .title(Span::styled(
            format!(" {} ", workout::display_name(workout)),
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        ));
    let bar_width = area.width.saturating_sub(4) as usize;
    let detail = Paragraph::new(workout_card_lines(workout, bar_width))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

pub fn render_workouts(f: &mut Frame, area: Rect, model: &WorkoutsModel) {
    let source = match &model.load_state {
        LoadState::Idle | LoadState::Loading => {
            render_message(f, area, "Loading workout data...", Color::Green);
            return;
        }
        LoadState::Failed(message) => {
            render_message(f, area, &format!("Error loading workouts: {}", message), Color::Red);
            return;
        }
        LoadState::Loaded { source } => source.as_str(),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search
            Constraint::Min(3),    // List + detail
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "🏃 FITNESSBEE WORKOUTS",
        Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let filtered = model.filtered();
    search::render_search_input(
        f,
        chunks[1],
        &model.search_query,
        model.search_mode,
        filtered.len(),
    );

    if filtered.is_empty() {
        render_message(f, chunks[2], &empty_message(&model.search_query), Color::Gray);
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[2]);

    render_list(f, body[0], &filtered, model.selected_index, source);
    if let Some(workout) = model.selected_workout() {
        render_detail(f, body[1], workout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fallback_workouts;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_card_for_push_ups() {
        let lines = text(&workout_card_lines(&fallback_workouts()[0], 20));
        assert_eq!(lines[0], "Category: Strength");
        assert_eq!(lines[1], "Difficulty: Medium");
        assert_eq!(lines[2], "Equipment: Body weight");
        assert!(lines.contains(&"■ Chest (1)".to_string()));
        assert!(lines.contains(&"Total muscles targeted: 2".to_string()));
        assert!(lines.contains(&"Primary muscles: Chest, Triceps".to_string()));
        assert!(lines.contains(&"Estimated duration: 20 - 40 mins".to_string()));
        assert!(lines.contains(&"Calories burned: ~150 - 350 kcal".to_string()));
        assert_eq!(lines.last().unwrap(), "Difficulty level: Medium");
    }

    #[test]
    fn test_card_without_muscles() {
        let workout = Exercise {
            id: 3,
            name: Some("Mystery".to_string()),
            category: None,
            difficulty: None,
            equipment: vec![],
            muscles: vec![],
        };
        let lines = text(&workout_card_lines(&workout, 20));
        assert!(lines.contains(&"No muscle data".to_string()));
        assert!(lines.contains(&"Primary muscles: N/A".to_string()));
        assert!(lines.contains(&"Equipment: None".to_string()));
        assert!(lines.contains(&"Difficulty level: Unknown".to_string()));
    }
}
