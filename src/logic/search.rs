//! Search Logic
//!
//! Pure functions for filtering workouts by a search term.

use crate::api::Exercise;

/// Check whether a workout matches a search term
///
/// # Match Rules
/// - Matches are case-insensitive substring matches
/// - Checked against name, category, every equipment name and every muscle name
/// - Absent fields never match, so an empty term still skips a workout with
///   no name, category, equipment or muscles
///
/// # Examples
/// ```
/// use fitbee::api::fallback_workouts;
/// use fitbee::logic::search::workout_matches;
///
/// let plank = &fallback_workouts()[2];
/// assert!(workout_matches(plank, "CORE"));
/// assert!(workout_matches(plank, "shoulder"));
/// assert!(!workout_matches(plank, "glutes"));
/// ```
pub fn workout_matches(workout: &Exercise, term: &str) -> bool {
    let term = term.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&term);

    let name_match = workout.name.as_deref().is_some_and(contains);
    let category_match = workout
        .category
        .as_ref()
        .is_some_and(|c| contains(&c.name));
    let equipment_match = workout.equipment.iter().any(|eq| contains(&eq.name));
    let muscle_match = workout.muscles.iter().any(|m| contains(&m.name));

    name_match || category_match || equipment_match || muscle_match
}

/// Filter workouts by search term, keeping their original order
pub fn filter_workouts<'a>(workouts: &'a [Exercise], term: &str) -> Vec<&'a Exercise> {
    workouts
        .iter()
        .filter(|workout| workout_matches(workout, term))
        .collect()
}

/// Message shown when the filtered list is empty
pub fn empty_message(term: &str) -> String {
    if term.is_empty() {
        "No workouts available".to_string()
    } else {
        format!("No workouts found matching \"{}\"", term)
    }
}
