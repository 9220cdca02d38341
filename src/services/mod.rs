//! External Services
//!
//! This module contains services that interact with external systems:
//! - workouts: Cancellable background fetch of the workout list

pub mod workouts;

pub use workouts::{WorkoutLoader, WorkoutOutcome, WorkoutResponse};
