//! Workouts Model
//!
//! State of the workout browser: what was fetched, where it came from,
//! and the search/selection the user has applied on top.

use crate::api::Exercise;
use crate::logic::search;

/// Where the current workout list came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkoutSource {
    Live,
    Fallback,
}

impl WorkoutSource {
    pub fn as_str(&self) -> &str {
        match self {
            WorkoutSource::Live => "live",
            WorkoutSource::Fallback => "offline data",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    /// Page has not been opened yet
    Idle,
    Loading,
    Loaded { source: WorkoutSource },
    /// Generic error path; fetch failures are replaced by fallback data
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct WorkoutsModel {
    pub load_state: LoadState,

    /// Workouts as delivered by the last completed load
    pub workouts: Vec<Exercise>,

    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search term
    pub search_query: String,

    /// Index into the filtered list
    pub selected_index: Option<usize>,
}

impl WorkoutsModel {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Idle,
            workouts: Vec::new(),
            search_mode: false,
            search_query: String::new(),
            selected_index: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn begin_loading(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Replace the list with a finished load
    pub fn finish_loading(&mut self, workouts: Vec<Exercise>, source: WorkoutSource) {
        self.workouts = workouts;
        self.load_state = LoadState::Loaded { source };
        self.reset_selection();
    }

    pub fn fail(&mut self, message: String) {
        self.workouts.clear();
        self.load_state = LoadState::Failed(message);
        self.selected_index = None;
    }

    /// Workouts matching the current search term
    pub fn filtered(&self) -> Vec<&Exercise> {
        search::filter_workouts(&self.workouts, &self.search_query)
    }

    pub fn selected_workout(&self) -> Option<&Exercise> {
        let filtered = self.filtered();
        self.selected_index.and_then(|idx| filtered.get(idx).copied())
    }

    pub fn select_next(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected_index = None;
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.reset_selection();
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
        self.reset_selection();
    }

    pub fn clear_search(&mut self) {
        self.search_mode = false;
        self.search_query.clear();
        self.reset_selection();
    }

    /// Point at the first match, or nothing when the filter is empty
    fn reset_selection(&mut self) {
        self.selected_index = if self.filtered().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}

impl Default for WorkoutsModel {
    fn default() -> Self {
        Self::new()
    }
}
