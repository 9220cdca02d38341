//! Workout search through the keyboard
//!
//! Typing filters the list on every keystroke; the selection always points
//! at a visible match or at nothing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use fitbee::api::{fallback_workouts, Exercise, Named};
use fitbee::app::App;
use fitbee::config::Config;
use fitbee::handlers::handle_key;
use fitbee::logic::search::{empty_message, filter_workouts};
use fitbee::model::WorkoutSource;
use fitbee::storage::LocalStorage;
use fitbee::Page;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn names(app: &App) -> Vec<String> {
    app.model
        .workouts
        .filtered()
        .iter()
        .map(|w| w.name.clone().unwrap_or_default())
        .collect()
}

/// App sitting on the Workouts page with the fallback list loaded
fn loaded_app() -> App {
    let mut app = App::new(
        Config::default(),
        LocalStorage::new_in_memory().unwrap(),
        true,
    )
    .unwrap();
    app.model.ui.page = Page::Workouts;
    app.model
        .workouts
        .finish_loading(fallback_workouts(), WorkoutSource::Fallback);
    app
}

#[test]
fn test_search_by_category_muscle_and_equipment() {
    let workouts = fallback_workouts();

    let cardio: Vec<_> = filter_workouts(&workouts, "cardio")
        .iter()
        .map(|w| w.name.clone().unwrap())
        .collect();
    assert_eq!(cardio, vec!["Jumping Jacks", "Burpees"]);

    assert_eq!(filter_workouts(&workouts, "GLUTES").len(), 1);
    assert_eq!(filter_workouts(&workouts, "body weight").len(), 5);
    assert_eq!(filter_workouts(&workouts, "").len(), 5);
    assert!(filter_workouts(&workouts, "kettlebell").is_empty());
}

#[test]
fn test_typing_filters_live() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Char('/'));
    assert!(app.model.is_typing());

    type_text(&mut app, "card");
    assert_eq!(names(&app), vec!["Jumping Jacks", "Burpees"]);
    assert_eq!(app.model.workouts.selected_index, Some(0));

    type_text(&mut app, "x");
    assert!(names(&app).is_empty());
    assert_eq!(app.model.workouts.selected_index, None);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(names(&app).len(), 2);
    assert_eq!(app.model.workouts.selected_index, Some(0));
}

#[test]
fn test_navigation_keys_are_text_while_typing() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "q1");

    assert!(!app.model.ui.should_quit);
    assert_eq!(app.model.page(), Page::Workouts);
    assert_eq!(app.model.workouts.search_query, "q1");
    assert!(names(&app).is_empty());
    assert_eq!(app.model.workouts.selected_index, None);
}

#[test]
fn test_enter_keeps_filter_and_esc_clears_it() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "core");
    press(&mut app, KeyCode::Enter);

    assert!(!app.model.is_typing());
    assert_eq!(names(&app), vec!["Plank"]);

    press(&mut app, KeyCode::Esc);
    assert!(app.model.workouts.search_query.is_empty());
    assert_eq!(names(&app).len(), 5);
}

#[test]
fn test_selection_stays_within_matches() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "strength");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.model.workouts.selected_index, Some(1));
    assert_eq!(
        app.model.workouts.selected_workout().and_then(|w| w.name.as_deref()),
        Some("Squats")
    );

    press(&mut app, KeyCode::Char('k'));
    assert_eq!(
        app.model.workouts.selected_workout().and_then(|w| w.name.as_deref()),
        Some("Push-ups")
    );
}

#[test]
fn test_empty_messages() {
    assert_eq!(empty_message(""), "No workouts available");
    assert_eq!(
        empty_message("zumba"),
        "No workouts found matching \"zumba\""
    );
}

#[test]
fn test_live_exercise_without_fields_only_matches_nothing() {
    let bare = Exercise {
        id: 77,
        name: None,
        category: None,
        difficulty: None,
        equipment: vec![],
        muscles: vec![],
    };
    let named = Exercise {
        id: 78,
        name: None,
        category: Some(Named::new("Arms")),
        difficulty: None,
        equipment: vec![],
        muscles: vec![],
    };
    let workouts = vec![bare, named];

    let visible = filter_workouts(&workouts, "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 78);
}

#[tokio::test]
async fn test_reentering_page_starts_with_empty_search() {
    let mut app = App::new(
        Config::default(),
        LocalStorage::new_in_memory().unwrap(),
        true,
    )
    .unwrap();
    app.navigate(Page::Workouts);
    app.process_workout_responses();

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "cardio");
    press(&mut app, KeyCode::Enter);
    assert_eq!(names(&app).len(), 2);

    app.navigate(Page::Water);
    app.navigate(Page::Workouts);
    app.process_workout_responses();

    assert!(app.model.workouts.search_query.is_empty());
    assert!(!app.model.is_typing());
    let filtered = app.model.workouts.filtered().len();
    assert_eq!(filtered, app.model.workouts.workouts.len());
    assert_eq!(filtered, 5);
    assert_eq!(app.model.workouts.selected_index, Some(0));
}

#[tokio::test]
async fn test_reload_clears_search() {
    let mut app = App::new(
        Config::default(),
        LocalStorage::new_in_memory().unwrap(),
        true,
    )
    .unwrap();
    app.navigate(Page::Workouts);
    app.process_workout_responses();

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "core");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('r'));
    app.process_workout_responses();

    assert!(app.model.workouts.search_query.is_empty());
    assert_eq!(names(&app).len(), 5);
}
