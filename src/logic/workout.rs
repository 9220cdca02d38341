//! Workout display logic
//!
//! Labels and the muscle breakdown shown on a workout card.

use crate::api::Exercise;

/// Greens used for the muscle breakdown, cycled by index
pub const MUSCLE_PALETTE: [(u8, u8, u8); 7] = [
    (0x66, 0xbb, 0x6a),
    (0x81, 0xc7, 0x84),
    (0xa5, 0xd6, 0xa7),
    (0xc8, 0xe6, 0xc9),
    (0xdc, 0xed, 0xc8),
    (0xe6, 0xee, 0x9c),
    (0xff, 0xf5, 0x9d),
];

pub const ESTIMATED_DURATION: &str = "20 - 40 mins";
pub const ESTIMATED_CALORIES: &str = "~150 - 350 kcal";

/// One slice of the muscle breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleSlice {
    pub name: String,
    pub value: u32,
    pub color: (u8, u8, u8),
}

/// Map the API's numeric difficulty to a label
pub fn difficulty_label(difficulty: Option<u8>) -> &'static str {
    match difficulty {
        Some(1) => "Easy",
        Some(2) => "Medium",
        Some(3) => "Hard",
        _ => "Unknown",
    }
}

pub fn category_label(workout: &Exercise) -> &str {
    workout
        .category
        .as_ref()
        .map(|c| c.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("N/A")
}

pub fn equipment_label(workout: &Exercise) -> String {
    if workout.equipment.is_empty() {
        "None".to_string()
    } else {
        workout
            .equipment
            .iter()
            .map(|eq| eq.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Title for a workout card; nameless entries from the API still need a label
pub fn display_name(workout: &Exercise) -> String {
    match workout.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Exercise #{}", workout.id),
    }
}

/// Every targeted muscle weighs the same
pub fn muscle_slices(workout: &Exercise) -> Vec<MuscleSlice> {
    workout
        .muscles
        .iter()
        .enumerate()
        .map(|(index, muscle)| MuscleSlice {
            name: muscle.name.clone(),
            value: 1,
            color: MUSCLE_PALETTE[index % MUSCLE_PALETTE.len()],
        })
        .collect()
}

pub fn primary_muscles(slices: &[MuscleSlice]) -> String {
    if slices.is_empty() {
        "N/A".to_string()
    } else {
        slices
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
