use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::dashboard::GREEN;
use crate::config::Profile;
use crate::logic::{bmi, formatting::format_amount, goals};

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(value),
    ])
}

/// Profile fields as display lines
pub fn profile_lines(profile: &Profile, water_goal: u32) -> Vec<Line<'static>> {
    let bmi_text = match bmi::calculate_bmi(profile.weight_kg, profile.height_cm) {
        Some(value) => format!("{:.1} ({})", value, bmi::bmi_category(value)),
        None => "--".to_string(),
    };

    vec![
        field("Name", profile.name.clone()),
        field("Age", profile.age.to_string()),
        field("Height", format!("{} cm", format_amount(profile.height_cm))),
        field("Weight", format!("{} kg", format_amount(profile.weight_kg))),
        field("Goal weight", format!("{} kg", format_amount(profile.goal_weight_kg))),
        field(
            "To goal",
            format!(
                "{} kg",
                format_amount(goals::remaining_to_goal(profile.weight_kg, profile.goal_weight_kg))
            ),
        ),
        field("BMI", bmi_text),
        field("Daily water goal", format!("{} glasses", water_goal)),
    ]
}

pub fn render_profile(f: &mut Frame, area: Rect, profile: &Profile, water_goal: u32) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let details = Paragraph::new(profile_lines(profile, water_goal)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GREEN))
            .title(Span::styled(
                " 👤 Profile ",
                Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(details, chunks[0]);

    let lower_is_better = profile.goal_weight_kg < profile.weight_kg;
    let progress = goals::goal_progress(profile.weight_kg, profile.goal_weight_kg, lower_is_better);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Weight Goal "))
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));
    f.render_widget(gauge, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    #[test]
    fn test_default_profile_lines() {
        let lines = text(&profile_lines(&Profile::default(), 8));
        assert_eq!(lines[0], "Name Bot");
        assert_eq!(lines[3], "Weight 76 kg");
        assert_eq!(lines[5], "To goal 6 kg");
        assert_eq!(lines[6], "BMI 24.8 (Normal weight)");
        assert_eq!(lines[7], "Daily water goal 8 glasses");
    }

    #[test]
    fn test_missing_height_shows_placeholder_bmi() {
        let profile = Profile {
            height_cm: 0.0,
            ..Profile::default()
        };
        let lines = text(&profile_lines(&profile, 8));
        assert_eq!(lines[6], "BMI --");
    }
}
