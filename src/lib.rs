//! FitBee fitness tracker TUI
//!
//! Exposes modules for the binary and for testing

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod logic;
pub mod model;
pub mod services;
pub mod storage;
pub mod ui;
pub mod utils;

/// Top-level pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Workouts,
    Water,
    Profile,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Workouts, Page::Water, Page::Profile];

    pub fn as_str(&self) -> &str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Workouts => "Workouts",
            Page::Water => "Water",
            Page::Profile => "Profile",
        }
    }

    /// Position in the navigation bar
    pub fn index(&self) -> usize {
        match self {
            Page::Dashboard => 0,
            Page::Workouts => 1,
            Page::Water => 2,
            Page::Profile => 3,
        }
    }
}
