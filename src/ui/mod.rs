// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into nav bar, page body and legend
// - render: Main orchestration function that coordinates all rendering
// - nav_bar: App name and page tabs along the top
// - dashboard / workouts / water / profile: One module per page
// - footer: Copyright line under the dashboard
// - legend: Per-page hotkey legend
// - search: Workout search input box
// - toast: Toast notifications (brief pop-up messages)

pub mod dashboard;
pub mod footer;
pub mod layout;
pub mod legend;
pub mod nav_bar;
pub mod profile;
pub mod render;
pub mod search;
pub mod toast;
pub mod water;
pub mod workouts;

// Re-export main render function for convenience
pub use render::render;
