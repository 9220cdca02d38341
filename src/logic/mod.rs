//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - bmi: Body mass index and its category
//! - formatting: Number grouping and footer text
//! - goals: Progress towards a target value
//! - search: Workout search filtering
//! - ui: Page cycling and toast timing
//! - water: Date keys, daily totals and goal progress
//! - workout: Display labels and muscle breakdown for a single exercise

pub mod bmi;
pub mod formatting;
pub mod goals;
pub mod search;
pub mod ui;
pub mod water;
pub mod workout;
