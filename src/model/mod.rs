//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **UiModel**: Active page, toast, quit flag
//! - **WorkoutsModel**: Load state, fetched workouts, search and selection
//! - **WaterModel**: The water log and the daily goal
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the App runtime
//! - Pure accessors: Helper methods are side-effect free

pub mod ui;
pub mod water;
pub mod workouts;

pub use ui::UiModel;
pub use water::WaterModel;
pub use workouts::{LoadState, WorkoutSource, WorkoutsModel};

use crate::config::Profile;
use crate::Page;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Page, toast and quit state
    pub ui: UiModel,

    /// Workout browser state
    pub workouts: WorkoutsModel,

    /// Water log state
    pub water: WaterModel,

    /// Profile shown on the dashboard and profile page
    pub profile: Profile,
}

impl Model {
    pub fn new(profile: Profile, water_goal: u32) -> Self {
        Self {
            ui: UiModel::new(),
            workouts: WorkoutsModel::new(),
            water: WaterModel::new(water_goal),
            profile,
        }
    }

    pub fn page(&self) -> Page {
        self.ui.page
    }

    /// Whether keystrokes are currently going into the search box
    pub fn is_typing(&self) -> bool {
        self.ui.page == Page::Workouts && self.workouts.search_mode
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}
