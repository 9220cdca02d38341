//! Dashboard page
//!
//! Today's summary. Activity figures are fixed sample data; the greeting,
//! weight goal and BMI come from the profile.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::{footer, layout::equal_columns};
use crate::config::Profile;
use crate::logic::{
    bmi,
    formatting::{format_amount, format_thousands},
    goals::goal_progress,
};
use crate::utils::truncate_to_width;

pub const GREEN: Color = Color::Rgb(0x2e, 0x7d, 0x32);
const ORANGE: Color = Color::Rgb(0xff, 0x98, 0x00);

const DAILY_STEPS: u64 = 5243;
const STEP_GOAL: u64 = 10_000;

/// A headline figure
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub subtitle: Option<&'static str>,
}

pub const SUMMARY_CARDS: [Card; 4] = [
    Card {
        icon: "📈",
        title: "Steps",
        value: "5,243",
        subtitle: None,
    },
    Card {
        icon: "🔥",
        title: "Calories Burned",
        value: "435 kcal",
        subtitle: None,
    },
    Card {
        icon: "⏱",
        title: "Active Time",
        value: "45 min",
        subtitle: None,
    },
    Card {
        icon: "🫀",
        title: "Heart Rate",
        value: "72 bpm",
        subtitle: None,
    },
];

pub const DETAIL_CARDS: [Card; 2] = [
    Card {
        icon: "🦶",
        title: "Step Counter",
        value: "4,704 steps",
        subtitle: Some("Goal: 10,000 steps\nKeep going!"),
    },
    Card {
        icon: "💧",
        title: "Water Intake",
        value: "4/8 glasses",
        subtitle: Some("Stay hydrated!"),
    },
];

/// A progress bar towards some target
pub struct Goal {
    pub title: String,
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub lower_is_better: bool,
    pub color: Color,
}

impl Goal {
    fn new(title: &str, label: String, current: f64, target: f64, color: Color) -> Self {
        Self {
            title: title.to_string(),
            label,
            current,
            target,
            lower_is_better: false,
            color,
        }
    }

    pub fn progress(&self) -> f64 {
        goal_progress(self.current, self.target, self.lower_is_better)
    }
}

pub fn goals(profile: &Profile) -> Vec<Goal> {
    let mut weight = Goal::new(
        "Weight Goal",
        format!(
            "{} / {} kg",
            format_amount(profile.weight_kg),
            format_amount(profile.goal_weight_kg)
        ),
        profile.weight_kg,
        profile.goal_weight_kg,
        Color::Magenta,
    );
    weight.lower_is_better = profile.goal_weight_kg < profile.weight_kg;

    vec![
        Goal::new(
            "Daily Steps",
            format!("{} / {}", format_thousands(DAILY_STEPS), format_thousands(STEP_GOAL)),
            DAILY_STEPS as f64,
            STEP_GOAL as f64,
            Color::Green,
        ),
        Goal::new("Weekly Workouts", "3 / 5".to_string(), 3.0, 5.0, Color::Blue),
        weight,
        Goal::new("Sleep Goal", "6.5 / 8 hrs".to_string(), 6.5, 8.0, Color::Red),
        Goal::new("Calories Target", "435 / 2000 kcal".to_string(), 435.0, 2000.0, ORANGE),
    ]
}

pub const REPORT: [(&str, &str); 4] = [
    ("Duration", "45 mins"),
    ("Calories Burned", "435 kcal"),
    ("Difficulty", "Moderate"),
    ("Top Exercise", "Jumping Jacks"),
];

fn render_card(f: &mut Frame, area: Rect, icon: &str, title: &str, value: &str, subtitle: Option<&str>) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GREEN))
        .title(truncate_to_width(&format!(" {} {} ", icon, title), inner_width));

    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(value, inner_width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(subtitle) = subtitle {
        for part in subtitle.split('\n') {
            lines.push(Line::from(Span::styled(
                truncate_to_width(part, inner_width),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_bmi_card(f: &mut Frame, area: Rect, profile: &Profile) {
    let (value, subtitle) = match bmi::calculate_bmi(profile.weight_kg, profile.height_cm) {
        Some(value) => (
            format!("{:.1}", value),
            format!(
                "{}\n{} kg, {} cm",
                bmi::bmi_category(value),
                format_amount(profile.weight_kg),
                format_amount(profile.height_cm)
            ),
        ),
        None => ("--".to_string(), "Set height and weight in your profile".to_string()),
    };
    render_card(f, area, "⚖", "BMI", &value, Some(&subtitle));
}

fn render_goal(f: &mut Frame, area: Rect, goal: &Goal) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", goal.title)),
        )
        .gauge_style(Style::default().fg(goal.color))
        .ratio(goal.progress())
        .label(goal.label.clone());
    f.render_widget(gauge, area);
}

fn render_report(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = REPORT
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*value),
            ])
        })
        .collect();

    let report = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GREEN))
            .title(Span::styled(
                " Workout Report ",
                Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(report, area);
}

pub fn render_dashboard(f: &mut Frame, area: Rect, profile: &Profile, app_name: &str, app_version: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Summary cards
            Constraint::Length(5), // Detail cards
            Constraint::Length(3), // Goals
            Constraint::Length(6), // Workout report
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hello, {}!", profile.name),
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from("Here's your fitness summary for today"),
    ]);
    f.render_widget(greeting, chunks[0]);

    for (card, col) in SUMMARY_CARDS.iter().zip(equal_columns(chunks[1], SUMMARY_CARDS.len())) {
        render_card(f, col, card.icon, card.title, card.value, card.subtitle);
    }

    let detail_cols = equal_columns(chunks[2], DETAIL_CARDS.len() + 1);
    for (card, col) in DETAIL_CARDS.iter().zip(detail_cols.iter()) {
        render_card(f, *col, card.icon, card.title, card.value, card.subtitle);
    }
    render_bmi_card(f, detail_cols[DETAIL_CARDS.len()], profile);

    let goals = goals(profile);
    for (goal, col) in goals.iter().zip(equal_columns(chunks[3], goals.len())) {
        render_goal(f, col, goal);
    }

    render_report(f, chunks[4]);
    footer::render_footer(f, chunks[6], app_name, app_version);
}
